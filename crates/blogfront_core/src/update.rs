use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ScrollSettled(metrics) => {
            let near_bottom = state
                .feed()
                .is_some_and(|feed| feed.near_bottom(&metrics));
            if near_bottom {
                begin_load(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::LoadMoreRequested => begin_load(&mut state),
        Msg::PostsLoaded { offset, result } => {
            let applied = state.feed_mut().is_some_and(|feed| {
                // A completion for another offset cannot belong to the fetch in flight.
                feed.offset() == offset && feed.finish_load(result)
            });
            if applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EmailChanged(email) => {
            if let Some(form) = state.subscription_mut() {
                form.set_email(email);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubscribeSubmitted => {
            let effect = state.subscription_mut().and_then(|form| form.submit());
            match effect {
                Some(effect) => {
                    state.mark_dirty();
                    vec![effect]
                }
                None => Vec::new(),
            }
        }
        Msg::SubscriptionCompleted(result) => {
            let applied = state
                .subscription_mut()
                .is_some_and(|form| form.complete(result));
            if applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_load(state: &mut AppState) -> Vec<Effect> {
    match state.feed_mut().and_then(|feed| feed.begin_load()) {
        Some(effect) => {
            state.mark_dirty();
            vec![effect]
        }
        None => Vec::new(),
    }
}
