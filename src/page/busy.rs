use crate::interface::ControlView;

/// Label shown while a submission is in flight
pub const BUSY_LABEL: &str = "Enviando...";

/// Disable a submit control for the duration of a request, or restore it.
///
/// Capturing the original label is skipped when a capture already exists, so
/// a second `busy = true` before the restore cannot overwrite it with the
/// busy label.
pub fn set_busy<C: ControlView>(control: &C, busy: bool, fallback_label: &str) {
    if busy {
        if control.saved_label().is_none() {
            control.save_label(&control.label());
        }
        control.set_enabled(false);
        control.set_label(BUSY_LABEL);
    } else {
        let original = control
            .saved_label()
            .unwrap_or_else(|| fallback_label.to_string());
        control.set_enabled(true);
        control.set_label(&original);
        control.clear_saved_label();
    }
}
