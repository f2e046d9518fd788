use std::sync::mpsc;

use blogfront_core::{Effect, Msg, PostSummary, RequestFailed, SubscriptionReply};
use blogfront_engine::{EngineEvent, EngineHandle, EventSink, PostRecord, SubscribeReply};
use front_logging::{front_error, front_info};

pub struct EffectRunner<'a> {
    engine: &'a EngineHandle,
}

impl<'a> EffectRunner<'a> {
    pub fn new(engine: &'a EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPosts { offset, limit } => {
                    front_info!("FetchPosts offset={} limit={}", offset, limit);
                    self.engine.load_posts(offset, limit);
                }
                Effect::SubmitSubscription { email } => {
                    front_info!("SubmitSubscription email_len={}", email.len());
                    self.engine.subscribe(email);
                }
            }
        }
    }
}

/// Feeds engine completions back into the message loop.
pub struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl MsgSink {
    pub fn new(tx: mpsc::Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::PostsLoaded { offset, result } => Msg::PostsLoaded {
                offset,
                result: result
                    .map(|posts| posts.into_iter().map(map_post).collect())
                    .map_err(|err| {
                        front_error!("Error loading posts: {}", err);
                        RequestFailed
                    }),
            },
            EngineEvent::SubscriptionCompleted { result } => {
                Msg::SubscriptionCompleted(result.map(map_reply).map_err(|err| {
                    front_error!("Subscription error: {}", err);
                    RequestFailed
                }))
            }
        };
        let _ = self.tx.send(msg);
    }
}

fn map_post(record: PostRecord) -> PostSummary {
    PostSummary {
        file: record.file,
        title: record.title,
        date: record.date,
    }
}

fn map_reply(reply: SubscribeReply) -> SubscriptionReply {
    SubscriptionReply {
        success: reply.success,
        message: reply.message,
    }
}
