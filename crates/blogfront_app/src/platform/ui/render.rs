use blogfront_core::{AppViewModel, FeedView, PostItemView, StatusTone, SubscriptionView};

use super::constants::*;
use super::dom::{Element, Node};

/// A single mutation of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetHidden { element: ElementId, hidden: bool },
    AppendChild { parent: ElementId, node: Node },
    SetText { element: ElementId, text: String },
    SetClassName { element: ElementId, class_name: String },
    SetDisabled { element: ElementId, disabled: bool },
    SetValue { element: ElementId, value: String },
    AddClasses { element: ElementId, classes: Vec<String> },
}

/// Translates the view into page mutations.
///
/// `rendered_posts` is how many appended items the page already shows; only
/// the remainder is emitted.
pub fn render(view: &AppViewModel, rendered_posts: usize) -> Vec<DomCommand> {
    let mut cmds = Vec::new();
    if let Some(feed) = &view.feed {
        render_feed(feed, rendered_posts, &mut cmds);
    }
    if let Some(form) = &view.subscription {
        render_subscription(form, &mut cmds);
    }
    cmds
}

/// Marks the nav links at `indices` as active.
pub fn highlight_nav(indices: &[usize]) -> Vec<DomCommand> {
    indices
        .iter()
        .map(|&index| DomCommand::AddClasses {
            element: ElementId::NavLink(index),
            classes: ACTIVE_NAV_CLASSES.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}

fn render_feed(feed: &FeedView, rendered_posts: usize, cmds: &mut Vec<DomCommand>) {
    cmds.extend(
        feed.appended
            .iter()
            .skip(rendered_posts)
            .map(|post| DomCommand::AppendChild {
                parent: ElementId::PostsContainer,
                node: post_item(post),
            }),
    );
    cmds.push(DomCommand::SetHidden {
        element: ElementId::LoadingIndicator,
        hidden: !feed.loading_indicator_visible,
    });
    cmds.push(DomCommand::SetHidden {
        element: ElementId::EndOfPosts,
        hidden: !feed.end_of_posts_visible,
    });
}

fn render_subscription(form: &SubscriptionView, cmds: &mut Vec<DomCommand>) {
    cmds.push(DomCommand::SetDisabled {
        element: ElementId::SubmitButton,
        disabled: !form.submit_enabled,
    });
    cmds.push(DomCommand::SetText {
        element: ElementId::SubmitButton,
        text: form.submit_label.clone(),
    });
    cmds.push(DomCommand::SetValue {
        element: ElementId::EmailInput,
        value: form.email_value.clone(),
    });
    if let Some(status) = &form.status {
        let class_name = match status.tone {
            StatusTone::Success => STATUS_SUCCESS_CLASS,
            StatusTone::Error => STATUS_ERROR_CLASS,
        };
        cmds.push(DomCommand::SetText {
            element: ElementId::SubscriptionStatus,
            text: status.text.clone(),
        });
        cmds.push(DomCommand::SetClassName {
            element: ElementId::SubscriptionStatus,
            class_name: class_name.to_string(),
        });
    }
}

/// `<article class="post-item ..."><h2><a href="/post/slug">title</a></h2><p>date</p></article>`
pub fn post_item(post: &PostItemView) -> Node {
    Element::new("article")
        .class(POST_ITEM_CLASS)
        .child(
            Element::new("h2").class(POST_TITLE_CLASS).child(
                Element::new("a")
                    .attr("href", post.href.clone())
                    .class(POST_LINK_CLASS)
                    .text(post.title.clone()),
            ),
        )
        .child(Element::new("p").class(POST_DATE_CLASS).text(post.date.clone()))
        .into()
}
