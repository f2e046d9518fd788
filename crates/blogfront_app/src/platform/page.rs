//! In-memory page surface the controllers render into.

use blogfront_core::ScrollMetrics;
use blogfront_engine::PageSnapshot;
use front_logging::front_trace;

use super::ui::constants::ElementId;
use super::ui::dom::Node;
use super::ui::render::DomCommand;

/// Height of everything around the posts container.
const CHROME_HEIGHT_PX: f64 = 600.0;
/// Rendered height of one `.post-item`.
const POST_ITEM_HEIGHT_PX: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusElement {
    pub text: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessPage {
    current_path: String,
    server_rendered_posts: usize,
    appended: Vec<Node>,
    loading_indicator_hidden: bool,
    end_of_posts_hidden: bool,
    status: StatusElement,
    submit_button: SubmitButton,
    email_value: String,
    nav: Vec<NavLink>,
}

impl HeadlessPage {
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        let (email_value, submit_label) = snapshot
            .newsletter_form
            .as_ref()
            .map(|form| (form.email_value.clone(), form.submit_label.clone()))
            .unwrap_or_default();
        Self {
            current_path: snapshot.current_path.clone(),
            server_rendered_posts: snapshot.post_item_count,
            appended: Vec::new(),
            loading_indicator_hidden: true,
            end_of_posts_hidden: true,
            status: StatusElement::default(),
            submit_button: SubmitButton {
                label: submit_label,
                disabled: false,
            },
            email_value,
            nav: snapshot
                .nav_hrefs
                .iter()
                .map(|href| NavLink {
                    href: href.clone(),
                    classes: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn apply(&mut self, command: DomCommand) {
        front_trace!("apply {:?}", command);
        match command {
            DomCommand::SetHidden { element, hidden } => match element {
                ElementId::LoadingIndicator => self.loading_indicator_hidden = hidden,
                ElementId::EndOfPosts => self.end_of_posts_hidden = hidden,
                _ => {}
            },
            DomCommand::AppendChild {
                parent: ElementId::PostsContainer,
                node,
            } => self.appended.push(node),
            DomCommand::AppendChild { .. } => {}
            DomCommand::SetText { element, text } => match element {
                ElementId::SubscriptionStatus => self.status.text = text,
                ElementId::SubmitButton => self.submit_button.label = text,
                _ => {}
            },
            DomCommand::SetClassName {
                element: ElementId::SubscriptionStatus,
                class_name,
            } => self.status.class_name = class_name,
            DomCommand::SetClassName { .. } => {}
            DomCommand::SetDisabled {
                element: ElementId::SubmitButton,
                disabled,
            } => self.submit_button.disabled = disabled,
            DomCommand::SetDisabled { .. } => {}
            DomCommand::SetValue {
                element: ElementId::EmailInput,
                value,
            } => self.email_value = value,
            DomCommand::SetValue { .. } => {}
            DomCommand::AddClasses {
                element: ElementId::NavLink(index),
                classes,
            } => {
                if let Some(link) = self.nav.get_mut(index) {
                    for class in classes {
                        if !link.classes.contains(&class) {
                            link.classes.push(class);
                        }
                    }
                }
            }
            DomCommand::AddClasses { .. } => {}
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// All `.post-item` elements: server-rendered plus appended.
    pub fn post_count(&self) -> usize {
        self.server_rendered_posts + self.appended.len()
    }

    pub fn appended_count(&self) -> usize {
        self.appended.len()
    }

    pub fn appended_posts(&self) -> &[Node] {
        &self.appended
    }

    /// Markup of the appended items, in order.
    pub fn appended_html(&self) -> String {
        self.appended
            .iter()
            .map(Node::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn loading_indicator_visible(&self) -> bool {
        !self.loading_indicator_hidden
    }

    pub fn end_of_posts_visible(&self) -> bool {
        !self.end_of_posts_hidden
    }

    pub fn status(&self) -> &StatusElement {
        &self.status
    }

    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit_button
    }

    pub fn email_value(&self) -> &str {
        &self.email_value
    }

    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn document_height(&self) -> f64 {
        CHROME_HEIGHT_PX + self.post_count() as f64 * POST_ITEM_HEIGHT_PX
    }

    /// Scroll position with the viewport's bottom edge at the document end.
    pub fn scroll_to_bottom(&self, viewport_height: f64) -> ScrollMetrics {
        let document_height = self.document_height();
        ScrollMetrics {
            viewport_height,
            scroll_y: (document_height - viewport_height).max(0.0),
            document_height,
        }
    }
}
