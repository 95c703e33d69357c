use dioxus::prelude::*;
use portfolio_core::content::TESTIMONIALS;
use portfolio_core::reveal::stagger_ms;

use crate::components::{SectionReveal, SectionTitle};

#[component]
pub fn TestimonialsSection() -> Element {
    rsx! {
        section { id: "testimonials", class: "page-section",
            SectionTitle { section: "testimonials".to_string(), title: "Testimonials".to_string() }
            div { class: "card-grid two narrow",
                for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                    SectionReveal {
                        key: "{index}",
                        latch: format!("testimonials.{}", index),
                        delay_ms: stagger_ms(index, 200),
                        class: "testimonial".to_string(),
                        p { class: "testimonial-quote", "{testimonial.quote}" }
                        p { class: "testimonial-author", "\u{2014} {testimonial.author}" }
                    }
                }
            }
        }
    }
}
