//! Builds a [`Page`] from static HTML using the page's class/attribute contract.

use crate::domain::model::{
    AnchorLink, CardKind, ContactAction, ContactButton, ContactForm, Dropdown, FaqItem,
    FilterControls, FormField, ListingCard, NavLink, NavMenu, Page, RevealTarget,
};
use crate::utils::error::{Result, SiteError};
use scraper::{ElementRef, Html, Selector};

const SKIPPED_INPUT_TYPES: [&str; 5] = ["submit", "button", "reset", "image", "file"];

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| SiteError::MarkupError {
        message: format!("invalid selector '{}': {:?}", css, e),
    })
}

fn text_of(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_class(element: ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn first_text(element: ElementRef, css: &Selector) -> Option<String> {
    element.select(css).next().map(text_of)
}

pub fn load_page(html: &str, location: &str) -> Result<Page> {
    let document = Html::parse_document(html);
    let mut page = Page::new(location);

    page.has_hamburger = document.select(&selector(".hamburger")?).next().is_some();
    page.nav_menu = load_nav_menu(&document)?;
    page.dropdowns = load_dropdowns(&document)?;
    page.faq_items = load_faq_items(&document)?;
    page.contact_form = load_contact_form(&document)?;
    page.filters = load_filters(&document)?;
    page.listings = load_listings(&document)?;
    page.contact_buttons = load_contact_buttons(&document)?;

    page.anchors = document
        .select(&selector(r##"a[href^="#"]"##)?)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| AnchorLink {
            href: href.to_string(),
        })
        .collect();
    page.element_ids = document
        .select(&selector("[id]")?)
        .filter_map(|el| el.value().id())
        .map(str::to_string)
        .collect();
    page.reveal_targets = load_reveal_targets(&document)?;

    tracing::debug!(
        "Loaded page '{}': {} listings, {} FAQ items, {} reveal targets",
        location,
        page.listings.len(),
        page.faq_items.len(),
        page.reveal_targets.len()
    );
    Ok(page)
}

fn load_nav_menu(document: &Html) -> Result<Option<NavMenu>> {
    let Some(menu) = document.select(&selector(".nav-menu")?).next() else {
        return Ok(None);
    };

    let links = document
        .select(&selector(".nav-menu a")?)
        .map(|a| NavLink {
            href: a.value().attr("href").map(str::to_string),
            label: text_of(a),
            active: has_class(a, "active"),
        })
        .collect();

    Ok(Some(NavMenu {
        links,
        open: has_class(menu, "active"),
    }))
}

fn load_dropdowns(document: &Html) -> Result<Vec<Dropdown>> {
    let menu = selector(".dropdown-menu")?;
    let trigger = selector("a, button")?;

    Ok(document
        .select(&selector(".dropdown")?)
        .map(|dropdown| Dropdown {
            label: first_text(dropdown, &trigger).unwrap_or_default(),
            has_menu: dropdown.select(&menu).next().is_some(),
        })
        .collect())
}

fn load_faq_items(document: &Html) -> Result<Vec<FaqItem>> {
    let question = selector(".faq-question")?;

    Ok(document
        .select(&selector(".faq-item")?)
        .map(|item| FaqItem {
            question: first_text(item, &question),
            open: has_class(item, "active"),
        })
        .collect())
}

fn load_contact_form(document: &Html) -> Result<Option<ContactForm>> {
    let Some(form) = document.select(&selector(".contact-form form")?).next() else {
        return Ok(None);
    };
    let option = selector("option")?;

    let mut fields = Vec::new();
    for control in form.select(&selector("input[name], select[name], textarea[name]")?) {
        let element = control.value();
        let Some(name) = element.attr("name") else {
            continue;
        };

        let value = match element.name() {
            "textarea" => control.text().collect::<String>(),
            "select" => select_value(control, &option),
            _ => {
                let input_type = element.attr("type").unwrap_or("text").to_ascii_lowercase();
                if SKIPPED_INPUT_TYPES.contains(&input_type.as_str()) {
                    continue;
                }
                if matches!(input_type.as_str(), "checkbox" | "radio") {
                    if element.attr("checked").is_none() {
                        continue;
                    }
                    element.attr("value").unwrap_or("on").to_string()
                } else {
                    element.attr("value").unwrap_or_default().to_string()
                }
            }
        };

        fields.push(FormField {
            name: name.to_string(),
            initial: value.clone(),
            value,
        });
    }

    Ok(Some(ContactForm { fields }))
}

/// 選中的 option，沒有則取第一個
fn select_value(select: ElementRef, option: &Selector) -> String {
    let options: Vec<ElementRef> = select.select(option).collect();
    let chosen = options
        .iter()
        .find(|o| o.value().attr("selected").is_some())
        .or_else(|| options.first());

    match chosen {
        Some(o) => o
            .value()
            .attr("value")
            .map(str::to_string)
            .unwrap_or_else(|| text_of(*o)),
        None => String::new(),
    }
}

fn load_filters(document: &Html) -> Result<FilterControls> {
    let option = selector("option")?;

    Ok(FilterControls {
        bound: document
            .select(&selector(".filter-group input, .filter-group select")?)
            .next()
            .is_some(),
        location: document
            .select(&selector(r#"select[name="location"]"#)?)
            .next()
            .map(|select| select_value(select, &option)),
        min_price: document
            .select(&selector(r#"input[name="min-price"]"#)?)
            .next()
            .map(|input| input.value().attr("value").unwrap_or_default().to_string()),
        max_price: document
            .select(&selector(r#"input[name="max-price"]"#)?)
            .next()
            .map(|input| input.value().attr("value").unwrap_or_default().to_string()),
    })
}

fn load_listings(document: &Html) -> Result<Vec<ListingCard>> {
    let title = selector("h2, h3, .listing-title")?;

    Ok(document
        .select(&selector(".listing-card")?)
        .map(|card| ListingCard {
            title: first_text(card, &title).unwrap_or_default(),
            location: card.value().attr("data-location").map(str::to_string),
            price: card.value().attr("data-price").map(str::to_string),
            visible: true,
        })
        .collect())
}

fn load_contact_buttons(document: &Html) -> Result<Vec<ContactButton>> {
    let mut buttons = Vec::new();

    for element in document.select(&selector("[data-whatsapp], [data-call]")?) {
        let attrs = element.value();
        let mut actions = Vec::new();

        if let Some(phone) = attrs.attr("data-whatsapp") {
            actions.push(ContactAction::WhatsApp {
                phone: phone.to_string(),
                message: attrs.attr("data-message").map(str::to_string),
            });
        }
        if let Some(phone) = attrs.attr("data-call") {
            actions.push(ContactAction::Call {
                phone: phone.to_string(),
            });
        }

        buttons.push(ContactButton {
            label: text_of(element),
            actions,
        });
    }

    Ok(buttons)
}

fn load_reveal_targets(document: &Html) -> Result<Vec<RevealTarget>> {
    let css = CardKind::ALL
        .iter()
        .map(|kind| format!(".{}", kind.class_name()))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(document
        .select(&selector(&css)?)
        .filter_map(|element| {
            CardKind::ALL
                .into_iter()
                .find(|kind| has_class(element, kind.class_name()))
        })
        .map(RevealTarget::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
<!DOCTYPE html>
<html>
<head><title>Harbour Realty</title></head>
<body>
  <nav>
    <div class="hamburger"><span></span></div>
    <ul class="nav-menu">
      <li><a href="index.html">Home</a></li>
      <li class="dropdown">
        <a href="services.html">Services</a>
        <div class="dropdown-menu"><a href="buying.html">Buying</a></div>
      </li>
      <li class="dropdown"><a href="blog.html">Blog</a></li>
      <li><a href="listings.html" class="active">Listings</a></li>
    </ul>
  </nav>
  <section id="services">
    <div class="service-card">Buying</div>
    <div class="service-card">Selling</div>
  </section>
  <div class="faq-item active">
    <div class="faq-question">Do you handle rentals?</div>
    <div class="faq-answer">Yes.</div>
  </div>
  <div class="faq-item"><div class="faq-answer">Orphan</div></div>
  <div class="filter-group">
    <select name="location">
      <option value="">All</option>
      <option value="Sydney" selected>Sydney</option>
    </select>
    <input type="number" name="min-price" value="100000">
    <input type="number" name="max-price">
  </div>
  <div class="listing-card" data-location="Sydney CBD" data-price="450000"><h3>Harbour flat</h3></div>
  <div class="listing-card" data-location="Melbourne"><h3>Studio</h3></div>
  <div class="contact-form" id="contact">
    <form>
      <input type="text" name="name">
      <input type="email" name="email" value="">
      <input type="tel" name="phone">
      <select name="service"><option value="">Choose</option><option>Buying</option></select>
      <input type="checkbox" name="newsletter">
      <textarea name="message">Hi</textarea>
      <button type="submit" name="send">Send</button>
      <input type="submit" name="go" value="Go">
    </form>
  </div>
  <a href="#" data-whatsapp="15551234567">WhatsApp us</a>
  <a href="#" data-call="15557654321" data-whatsapp="15557654321" data-message="Hi!">Call</a>
  <a href="#contact">Contact</a>
  <div class="testimonial-card">Great</div>
  <article class="blog-card">News</article>
</body>
</html>
"##;

    #[test]
    fn test_navigation_elements() {
        let page = load_page(PAGE, "https://example.com/listings.html").unwrap();

        assert!(page.has_hamburger);
        let menu = page.nav_menu.unwrap();
        let hrefs: Vec<_> = menu.links.iter().map(|l| l.href.clone().unwrap()).collect();
        assert_eq!(
            hrefs,
            vec!["index.html", "services.html", "buying.html", "blog.html", "listings.html"]
        );
        assert!(menu.links[4].active);
        assert_eq!(page.dropdowns.len(), 2);
        assert!(page.dropdowns[0].has_menu);
        assert_eq!(page.dropdowns[0].label, "Services");
        assert!(!page.dropdowns[1].has_menu);
    }

    #[test]
    fn test_faq_items() {
        let page = load_page(PAGE, "/faq.html").unwrap();
        assert_eq!(page.faq_items.len(), 2);
        assert_eq!(page.faq_items[0].question.as_deref(), Some("Do you handle rentals?"));
        assert!(page.faq_items[0].open);
        assert_eq!(page.faq_items[1].question, None);
    }

    #[test]
    fn test_contact_form_fields() {
        let page = load_page(PAGE, "/index.html").unwrap();
        let form = page.contact_form.unwrap();
        let names: Vec<_> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "phone", "service", "message"]);

        let values = form.values();
        assert_eq!(values["service"], "");
        assert_eq!(values["message"], "Hi");
    }

    #[test]
    fn test_filters_and_listings() {
        let page = load_page(PAGE, "/listings.html").unwrap();

        assert!(page.filters.bound);
        assert_eq!(page.filters.location.as_deref(), Some("Sydney"));
        assert_eq!(page.filters.min_price.as_deref(), Some("100000"));
        assert_eq!(page.filters.max_price.as_deref(), Some(""));

        assert_eq!(page.listings.len(), 2);
        assert_eq!(page.listings[0].title, "Harbour flat");
        assert_eq!(page.listings[0].price.as_deref(), Some("450000"));
        assert_eq!(page.listings[1].price, None);
    }

    #[test]
    fn test_contact_buttons_and_anchors() {
        let page = load_page(PAGE, "/index.html").unwrap();

        assert_eq!(page.contact_buttons.len(), 2);
        assert_eq!(
            page.contact_buttons[0].actions,
            vec![ContactAction::WhatsApp {
                phone: "15551234567".to_string(),
                message: None
            }]
        );
        assert_eq!(page.contact_buttons[1].label, "Call");
        assert_eq!(
            page.contact_buttons[1].actions,
            vec![
                ContactAction::WhatsApp {
                    phone: "15557654321".to_string(),
                    message: Some("Hi!".to_string())
                },
                ContactAction::Call {
                    phone: "15557654321".to_string()
                }
            ]
        );

        let hrefs: Vec<_> = page.anchors.iter().map(|a| a.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#", "#", "#contact"]);
        assert!(page.has_element_id("contact"));
        assert!(page.has_element_id("services"));
    }

    #[test]
    fn test_reveal_targets_in_document_order() {
        let page = load_page(PAGE, "/index.html").unwrap();
        let kinds: Vec<_> = page.reveal_targets.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CardKind::Service,
                CardKind::Service,
                CardKind::Listing,
                CardKind::Listing,
                CardKind::Testimonial,
                CardKind::Blog
            ]
        );
    }

    #[test]
    fn test_empty_page() {
        let page = load_page("<html><body><p>Hello</p></body></html>", "/").unwrap();
        assert!(!page.has_hamburger);
        assert!(page.nav_menu.is_none());
        assert!(page.contact_form.is_none());
        assert!(!page.filters.bound);
        assert!(page.filters.location.is_none());
        assert!(page.reveal_targets.is_empty());
    }
}
