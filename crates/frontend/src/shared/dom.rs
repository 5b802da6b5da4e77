//! Small helpers around file inputs and drag events.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

/// The `<input>` an event fired on.
pub fn input_from_event(ev: &Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// First file selected in a file input.
pub fn first_selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

/// First file carried by a drop.
pub fn first_dropped_file(ev: &DragEvent) -> Option<File> {
    ev.data_transfer()?.files()?.get(0)
}

/// Clear a file input so the same file can be picked again.
pub fn reset_input(input: &HtmlInputElement) {
    input.set_value("");
}

/// `File::size` is a double; browsers never report fractions.
pub fn file_size(file: &File) -> u64 {
    file.size().max(0.0) as u64
}
