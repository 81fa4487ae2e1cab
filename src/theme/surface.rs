/// Document boundary the controller drives: one optional control
/// element, one presentation flag on the document root, and the
/// indicator label written into the control.
pub trait ThemeSurface {
    fn control_present(&self) -> bool;
    fn flag_present(&self) -> bool;
    fn set_flag(&mut self, present: bool);
    /// Flips the flag and reports the post-toggle presence.
    fn toggle_flag(&mut self) -> bool;
    fn set_label(&mut self, text: &str);
}

#[cfg(target_arch = "wasm32")]
pub use wasm::DocumentSurface;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::ThemeSurface;
    use crate::theme::{CONTROL_ID, FLAG_CLASS};

    /// Live DOM surface. The flag lives on `document.body`; the control
    /// is looked up once by its fixed id and may legitimately be absent
    /// on pages that do not render the toggle.
    pub struct DocumentSurface {
        body: web_sys::HtmlElement,
        control: Option<web_sys::Element>,
    }

    impl DocumentSurface {
        pub fn attach() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let body = document.body()?;
            let control = document.get_element_by_id(CONTROL_ID);
            Some(Self { body, control })
        }
    }

    impl ThemeSurface for DocumentSurface {
        fn control_present(&self) -> bool {
            self.control.is_some()
        }

        fn flag_present(&self) -> bool {
            self.body.class_list().contains(FLAG_CLASS)
        }

        fn set_flag(&mut self, present: bool) {
            let classes = self.body.class_list();
            let result = if present {
                classes.add_1(FLAG_CLASS)
            } else {
                classes.remove_1(FLAG_CLASS)
            };
            if let Err(err) = result {
                log::warn!("failed to update body class {}: {:?}", FLAG_CLASS, err);
            }
        }

        fn toggle_flag(&mut self) -> bool {
            match self.body.class_list().toggle(FLAG_CLASS) {
                Ok(present) => present,
                Err(err) => {
                    log::warn!("classList.toggle({}) failed: {:?}", FLAG_CLASS, err);
                    self.flag_present()
                }
            }
        }

        fn set_label(&mut self, text: &str) {
            if let Some(control) = &self.control {
                control.set_text_content(Some(text));
            }
        }
    }
}
