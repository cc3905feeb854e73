//! Notification handlers
//!
//! The feed, read receipts, and the live event stream. The stream reads
//! from the instance-wide pub/sub subscriber and keeps only the caller's
//! own channel.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::stream::{self, Stream};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};
use vax_cache::ReceivedMessage;
use vax_core::UserId;
use vax_service::dto::{NotificationQuery, NotificationResponse};
use vax_service::NotificationService;

use crate::extractors::{ApiPath, ApiQuery, AuthUser, NotificationIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List notifications, newest first
///
/// GET /users/@me/notifications?limit=
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<NotificationQuery>,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.list(auth.user_id, query.limit).await?;
    Ok(Json(notifications))
}

/// PATCH /users/@me/notifications/{notification_id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<NotificationIdPath>,
) -> ApiResult<Json<NotificationResponse>> {
    let notification_id = path.notification_id()?;
    let service = NotificationService::new(state.service_context());
    let notification = service.mark_read(auth.user_id, notification_id).await?;
    Ok(Json(notification))
}

/// Live events for the current user as server-sent events
///
/// GET /users/@me/notifications/stream
pub async fn stream_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!(user_id = %auth.user_id, "Notification stream opened");
    let events = user_events(state.subscriber().receiver(), auth.user_id);
    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Turn the shared broadcast into one user's SSE events
///
/// Ends when the subscriber shuts down.
fn user_events(
    receiver: broadcast::Receiver<ReceivedMessage>,
    user_id: UserId,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(receiver, move |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(msg) => {
                    if !msg.is_for(user_id) {
                        continue;
                    }
                    let Some(event) = msg.event else {
                        warn!(channel = %msg.channel.name(), "Dropping unparseable event");
                        continue;
                    };
                    match Event::default().event(event.event_type()).json_data(&event) {
                        Ok(sse) => return Some((Ok(sse), receiver)),
                        Err(e) => warn!(error = %e, "Failed to encode event"),
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(user_id = %user_id, skipped, "Notification stream lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use vax_cache::PubSubChannel;
    use vax_core::events::VaccinationUpdatedEvent;
    use vax_core::DomainEvent;

    fn message(user_id: UserId, event: Option<DomainEvent>) -> ReceivedMessage {
        ReceivedMessage {
            channel: PubSubChannel::user(user_id),
            payload: String::new(),
            event,
        }
    }

    fn updated(user_id: UserId) -> DomainEvent {
        DomainEvent::VaccinationUpdated(VaccinationUpdatedEvent::new(user_id, "hepb", 1))
    }

    #[tokio::test]
    async fn test_stream_keeps_only_own_events() {
        let me = UserId::new();
        let other = UserId::new();
        let (tx, rx) = broadcast::channel(8);

        let events = user_events(rx, me);
        tx.send(message(other, Some(updated(other)))).unwrap();
        tx.send(message(me, None)).unwrap();
        tx.send(message(me, Some(updated(me)))).unwrap();
        drop(tx);

        let items: Vec<_> = events.collect().await;
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_stream_ends_when_subscriber_closes() {
        let (tx, rx) = broadcast::channel::<ReceivedMessage>(1);
        drop(tx);
        let items: Vec<_> = user_events(rx, UserId::new()).collect().await;
        assert!(items.is_empty());
    }
}
