use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::models::ProductRecord;

// Structural pattern of the target catalog page. The same constants feed both
// execution contexts: the static parse tree and the in-page script.
pub const CARD_CONTENT: &str = ".a-section.octopus-pc-card-content";
pub const LIST_ITEM: &str = ".a-list-item";
pub const TITLE: &str = ".octopus-pc-asin-title";
pub const PRICE: &str = ".a-price .a-offscreen";
pub const IMAGE: &str = "img";

struct FieldSelectors {
    items: Selector,
    title: Selector,
    price: Selector,
    image: Selector,
}

// Selectors are fixed literals; parsing them cannot fail.
static SELECTORS: LazyLock<FieldSelectors> = LazyLock::new(|| FieldSelectors {
    items: Selector::parse(&format!("{} {}", CARD_CONTENT, LIST_ITEM))
        .expect("item selector is valid"),
    title: Selector::parse(TITLE).expect("title selector is valid"),
    price: Selector::parse(PRICE).expect("price selector is valid"),
    image: Selector::parse(IMAGE).expect("image selector is valid"),
});

/// Maps a settled document to its catalog records, in document order.
///
/// Missing sub-fields degrade to empty strings, never to a skipped record,
/// and repeated elements yield repeated records. Zero matching containers is
/// an empty vector; whether that constitutes a failure is the caller's call.
pub fn extract_products(html: &str) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);

    document
        .select(&SELECTORS.items)
        .map(|element| {
            let title = element
                .select(&SELECTORS.title)
                .next()
                .map(|node| node.text().collect::<Vec<_>>().join(" ").trim().to_string())
                .unwrap_or_default();
            let price = element
                .select(&SELECTORS.price)
                .next()
                .map(|node| node.text().collect::<Vec<_>>().join(" ").trim().to_string())
                .unwrap_or_default();
            let image_url = element
                .select(&SELECTORS.image)
                .next()
                .and_then(|node| node.value().attr("src"))
                .unwrap_or_default()
                .to_string();

            ProductRecord {
                title,
                price,
                image_url,
            }
        })
        .collect()
}

/// In-page counterpart of [`extract_products`] for the live rendered DOM.
///
/// Returns a JS expression that applies the same structural pattern and
/// field-mapping rules and serializes the result, so both contexts stay in
/// lockstep on one set of selectors.
pub fn extraction_script() -> String {
    format!(
        r#"JSON.stringify(Array.from(document.querySelectorAll('{CARD_CONTENT} {LIST_ITEM}')).map((element) => ({{
    title: element.querySelector('{TITLE}')?.textContent?.trim() || '',
    price: element.querySelector('{PRICE}')?.textContent?.trim() || '',
    imageURL: element.querySelector('{IMAGE}')?.src || '',
}})))"#
    )
}
