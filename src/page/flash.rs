use maud::html;

use crate::interface::PageView;
use crate::model::structs::Severity;

/// Replace whatever the flash container holds with a single dismissible
/// banner and scroll it into view. Degrades to a log line when the page has
/// no flash container.
pub fn show_flash<P: PageView>(page: &P, message: &str, severity: Severity) {
    if !page.flash_available() {
        log::warn!("flash container missing, dropping message: {message}");
        return;
    }

    page.set_flash_html(&banner_html(message, severity));
    page.scroll_flash_into_view();
}

pub fn banner_html(message: &str, severity: Severity) -> String {
    html! {
        div class={ "alert alert-" (severity) " alert-dismissible fade show" } role="alert" {
            strong { (severity.title()) } " " (message)
            button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close" {}
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::headless::HeadlessPage;

    #[test]
    fn banner_carries_severity_class_and_title_prefix() {
        for (severity, title) in [
            (Severity::Success, "¡Éxito!"),
            (Severity::Warning, "Atención:"),
            (Severity::Danger, "Error:"),
        ] {
            let html = banner_html("mensaje", severity);
            assert!(html.contains(&format!("alert-{severity}")));
            assert!(html.contains(&format!("<strong>{title}</strong>")));
            assert!(html.contains("mensaje"));
        }
    }

    #[test]
    fn later_banner_replaces_the_earlier_one() {
        let page = HeadlessPage::new();
        show_flash(&page, "primero", Severity::Warning);
        show_flash(&page, "segundo", Severity::Danger);

        let html = page.flash_html().unwrap();
        assert!(!html.contains("primero"));
        assert!(html.contains("segundo"));
        assert_eq!(html.matches("role=\"alert\"").count(), 1);
        assert_eq!(page.flash_scrolls(), 2);
    }

    #[test]
    fn missing_container_is_a_silent_no_op() {
        let page = HeadlessPage::new();
        page.remove_flash_container();
        show_flash(&page, "ignorado", Severity::Danger);

        assert!(page.flash_html().is_none());
        assert_eq!(page.flash_scrolls(), 0);
    }

    #[test]
    fn banner_escapes_markup_in_the_message() {
        let html = banner_html("<script>alert(1)</script>", Severity::Danger);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
