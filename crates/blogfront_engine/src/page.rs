use scraper::{Html, Selector};

const POSTS_CONTAINER: &str = "#posts-container";
const POST_ITEM: &str = ".post-item";
const NAV_LINKS: &str = "nav a[href]";
const NEWSLETTER_FORM: &str = "#newsletter-form";
const EMAIL_INPUT: &str = "input[name=\"email\"]";
const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

/// The parts of a server-rendered page the controllers depend on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    pub current_path: String,
    pub has_posts_container: bool,
    /// Number of `.post-item` elements already rendered.
    pub post_item_count: usize,
    /// `href` of every `nav a[href]`, in document order.
    pub nav_hrefs: Vec<String>,
    pub newsletter_form: Option<NewsletterForm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterForm {
    pub email_value: String,
    pub submit_label: String,
}

impl PageSnapshot {
    pub fn parse(html: &str, current_path: &str) -> Self {
        let doc = Html::parse_document(html);

        let has_posts_container = selector(POSTS_CONTAINER)
            .is_some_and(|sel| doc.select(&sel).next().is_some());
        let post_item_count = selector(POST_ITEM).map_or(0, |sel| doc.select(&sel).count());
        let nav_hrefs = selector(NAV_LINKS)
            .map(|sel| {
                doc.select(&sel)
                    .filter_map(|link| link.value().attr("href"))
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let newsletter_form = selector(NEWSLETTER_FORM)
            .and_then(|sel| doc.select(&sel).next())
            .map(|form| {
                let email_value = selector(EMAIL_INPUT)
                    .and_then(|sel| form.select(&sel).next())
                    .and_then(|input| input.value().attr("value"))
                    .unwrap_or_default()
                    .to_string();
                let submit_label = selector(SUBMIT_BUTTON)
                    .and_then(|sel| form.select(&sel).next())
                    .map(|button| button.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();
                NewsletterForm {
                    email_value,
                    submit_label,
                }
            });

        Self {
            current_path: current_path.to_string(),
            has_posts_container,
            post_item_count,
            nav_hrefs,
            newsletter_form,
        }
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}
