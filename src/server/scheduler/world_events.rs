use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, state::AppState};

/// Starts the world event lifecycle scheduler
///
/// On every tick of `cron` this promotes scheduled events whose start has passed and retires
/// active events whose end has passed, then announces both when an announcement channel is
/// configured.
///
/// # Arguments
/// - `state`: Shared application state
/// - `cron`: Six-field cron expression for the tick cadence
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; keep it alive for jobs to keep firing
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(state: AppState, cron: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            if let Err(e) = process_lifecycle(&state).await {
                tracing::error!("Error processing world event lifecycle: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("World event scheduler started ({})", cron);

    Ok(scheduler)
}

/// Runs one lifecycle pass
///
/// Expiry runs before promotion so an event scheduled right after one ends can take the
/// freed slot on the same tick.
async fn process_lifecycle(state: &AppState) -> Result<(), AppError> {
    let lifecycle = state.lifecycle();
    let announcements = state.announcements();

    match lifecycle.check_and_end_expired().await {
        Ok(ended) => {
            if let Some(announcements) = &announcements {
                for event in &ended {
                    if let Err(e) = announcements.announce_completed(event).await {
                        tracing::error!("Failed to announce end of {}: {}", event.event_id, e);
                    }
                }
            }
        }
        Err(e) => tracing::error!("Error ending expired events: {}", e),
    }

    let started = lifecycle.check_and_start_scheduled().await?;
    if let Some(announcements) = &announcements {
        for event in &started {
            if let Err(e) = announcements.announce_started(event).await {
                tracing::error!("Failed to announce start of {}: {}", event.event_id, e);
            }
        }
    }

    Ok(())
}
