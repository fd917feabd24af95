use std::collections::HashMap;

use crate::interface::PageView;

/// Render validation messages next to their inputs. Previous annotations for
/// a field are dropped before its fresh ones are appended, in server order;
/// fields the page does not know are skipped.
pub fn render_field_errors<P: PageView>(page: &P, errors: &HashMap<String, Vec<String>>) {
    for (field, messages) in errors {
        page.clear_field_errors(field);
        for message in messages {
            page.append_field_error(field, message);
        }
    }
}
