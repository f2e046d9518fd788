pub const ACTIVE_NAV_CLASSES: &[&str] = &["text-white", "font-semibold"];

pub const STATUS_SUCCESS_CLASS: &str = "text-green-400 mt-2";
pub const STATUS_ERROR_CLASS: &str = "text-red-400 mt-2";

pub const POST_ITEM_CLASS: &str = "post-item border-b border-gray-800 pb-4";
pub const POST_TITLE_CLASS: &str = "text-xl font-semibold mb-2";
pub const POST_LINK_CLASS: &str = "hover:text-blue-400 transition-colors duration-200";
pub const POST_DATE_CLASS: &str = "text-gray-400 text-sm";

/// Elements of the page the controllers write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    PostsContainer,
    LoadingIndicator,
    EndOfPosts,
    SubscriptionStatus,
    SubmitButton,
    EmailInput,
    NavLink(usize),
}

