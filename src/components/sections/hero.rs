//! Hero Section
//!
//! Name card, tagline, and the two calls to action: download the resume
//! and hire on the freelance marketplace.

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::content::{HIRE_URL, PROFILE, RESUME_NOTICE};
use portfolio_core::{FileResume, PortfolioResult, ResumeSource};
use portfolio_ui::{Button, ButtonVariant, LinkButton};

use crate::components::SectionReveal;
use crate::context::use_collaborators;

/// How long the resume notice stays visible
const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Clear the notice only if it is still the one numbered `id`.
fn clear_if_current(notice: &mut Option<(u64, String)>, id: u64) -> bool {
    if matches!(notice, Some((current, _)) if *current == id) {
        *notice = None;
        return true;
    }
    false
}

/// Fetch the resume and let the visitor pick where to save it.
///
/// `Ok(None)` means the save dialog was cancelled.
async fn save_resume(source: &FileResume) -> PortfolioResult<Option<PathBuf>> {
    let bytes = source.fetch()?;

    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name(source.file_name())
        .save_file()
        .await
    else {
        return Ok(None);
    };

    handle.write(&bytes).await?;
    Ok(Some(handle.path().to_path_buf()))
}

#[component]
pub fn HeroSection() -> Element {
    let collaborators = use_collaborators();
    let mut notice: Signal<Option<(u64, String)>> = use_signal(|| None);
    let mut notice_seq = use_signal(|| 0u64);

    let download_resume = move |_| {
        let resume = collaborators.resume.clone();

        spawn(async move {
            let message = match resume {
                None => RESUME_NOTICE.to_string(),
                Some(source) => match save_resume(&source).await {
                    Ok(Some(path)) => {
                        tracing::info!(path = %path.display(), "Resume saved");
                        format!("Resume saved to {}", path.display())
                    }
                    Ok(None) => return,
                    Err(e) => {
                        tracing::error!(error = %e, "Resume download failed");
                        format!("Could not download resume: {}", e)
                    }
                },
            };

            // A later notice outlives this task's timer.
            let id = *notice_seq.peek() + 1;
            notice_seq.set(id);
            notice.set(Some((id, message)));
            tokio::time::sleep(NOTICE_DURATION).await;
            clear_if_current(&mut notice.write(), id);
        });
    };

    rsx! {
        section { id: "home", class: "hero",
            SectionReveal { latch: "home".to_string(), class: "hero-inner".to_string(),
                div { class: "hero-card",
                    h1 { class: "hero-name", "{PROFILE.name}" }
                    p { class: "hero-headline", "{PROFILE.headline}" }
                    p { class: "hero-affiliation", "{PROFILE.affiliation}" }
                    p { class: "hero-tagline", "{PROFILE.tagline}" }
                    div { class: "hero-banner",
                        p { "{PROFILE.banner}" }
                    }
                }

                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: download_resume,
                        "\u{1F4C4} Download Resume"
                    }
                    LinkButton {
                        href: HIRE_URL.to_string(),
                        variant: ButtonVariant::Accent,
                        external: true,
                        "\u{1F680} Hire Me on Fiverr"
                    }
                }

                if let Some((_, text)) = notice() {
                    p { class: "notice", role: "status", "{text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_timer_keeps_newer_notice() {
        let mut notice = Some((2, "Resume saved to /tmp/b.pdf".to_string()));
        assert!(!clear_if_current(&mut notice, 1));
        assert!(notice.is_some());

        assert!(clear_if_current(&mut notice, 2));
        assert!(notice.is_none());
        assert!(!clear_if_current(&mut notice, 2));
    }
}
