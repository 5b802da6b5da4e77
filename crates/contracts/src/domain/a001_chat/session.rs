//! Chat session state: the attached image and the visual-QA mode flag.
//!
//! Generic over the file handle `F` (a browser `File` in the UI) so the
//! invariants are testable natively. The visual-QA flag is only ever true
//! while an image is attached.

use crate::shared::upload_rules::{validate_image, UploadRejection};

/// Visual QA was requested without an attached image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("请先上传图片")]
pub struct VisualQaUnavailable;

/// Where the next chat submission goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRoute<F> {
    VisualQa { image: F, question: String },
    Text { message: String },
}

#[derive(Debug, Clone)]
pub struct ChatSession<F> {
    image: Option<F>,
    visual_qa: bool,
}

impl<F> Default for ChatSession<F> {
    fn default() -> Self {
        Self {
            image: None,
            visual_qa: false,
        }
    }
}

impl<F> ChatSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an image after validating its type and size. Returns the image
    /// it replaces. On rejection nothing changes.
    pub fn attach_image(
        &mut self,
        file: F,
        mime: &str,
        size: u64,
    ) -> Result<Option<F>, UploadRejection> {
        validate_image(mime, size)?;
        Ok(self.image.replace(file))
    }

    /// Drop the attached image and leave visual-QA mode.
    pub fn detach_image(&mut self) -> Option<F> {
        self.visual_qa = false;
        self.image.take()
    }

    pub fn image(&self) -> Option<&F> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn visual_qa_enabled(&self) -> bool {
        self.visual_qa
    }

    pub fn enable_visual_qa(&mut self) -> Result<(), VisualQaUnavailable> {
        if self.image.is_none() {
            return Err(VisualQaUnavailable);
        }
        self.visual_qa = true;
        Ok(())
    }

    pub fn disable_visual_qa(&mut self) {
        self.visual_qa = false;
    }

    /// Flip visual-QA mode; returns the new state.
    pub fn toggle_visual_qa(&mut self) -> Result<bool, VisualQaUnavailable> {
        if self.visual_qa {
            self.disable_visual_qa();
        } else {
            self.enable_visual_qa()?;
        }
        Ok(self.visual_qa)
    }
}

impl<F: Clone> ChatSession<F> {
    /// Route a submission. Empty or whitespace-only messages go nowhere.
    pub fn route(&self, message: &str) -> Option<ChatRoute<F>> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        match (&self.image, self.visual_qa) {
            (Some(image), true) => Some(ChatRoute::VisualQa {
                image: image.clone(),
                question: message.to_string(),
            }),
            _ => Some(ChatRoute::Text {
                message: message.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::limits::MAX_IMAGE_BYTES;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile(&'static str);

    fn with_image() -> ChatSession<FakeFile> {
        let mut session = ChatSession::new();
        session
            .attach_image(FakeFile("xray.png"), "image/png", 1024)
            .unwrap();
        session
    }

    #[test]
    fn test_toggle_without_image_is_noop() {
        let mut session = ChatSession::<FakeFile>::new();
        assert_eq!(session.toggle_visual_qa(), Err(VisualQaUnavailable));
        assert_eq!(session.enable_visual_qa(), Err(VisualQaUnavailable));
        assert!(!session.visual_qa_enabled());
    }

    #[test]
    fn test_detach_resets_mode() {
        let mut session = with_image();
        assert_eq!(session.toggle_visual_qa(), Ok(true));
        assert_eq!(session.detach_image(), Some(FakeFile("xray.png")));
        assert!(!session.visual_qa_enabled());
        assert!(!session.has_image());
        assert_eq!(session.toggle_visual_qa(), Err(VisualQaUnavailable));
    }

    #[test]
    fn test_rejected_image_leaves_state_untouched() {
        let mut session = with_image();
        session.enable_visual_qa().unwrap();

        let err = session
            .attach_image(FakeFile("huge.png"), "image/png", MAX_IMAGE_BYTES + 1)
            .unwrap_err();
        assert!(matches!(err, UploadRejection::ImageTooLarge { .. }));
        let err = session
            .attach_image(FakeFile("notes.txt"), "text/plain", 10)
            .unwrap_err();
        assert_eq!(err, UploadRejection::NotImage);

        assert_eq!(session.image(), Some(&FakeFile("xray.png")));
        assert!(session.visual_qa_enabled());
    }

    #[test]
    fn test_replacing_image_returns_previous() {
        let mut session = with_image();
        let previous = session
            .attach_image(FakeFile("ct.jpg"), "image/jpeg", 2048)
            .unwrap();
        assert_eq!(previous, Some(FakeFile("xray.png")));
    }

    #[test]
    fn test_routing() {
        let mut session = with_image();
        assert_eq!(session.route("   "), None);
        assert_eq!(
            session.route(" 这是什么部位？ "),
            Some(ChatRoute::Text {
                message: "这是什么部位？".to_string()
            })
        );

        session.enable_visual_qa().unwrap();
        assert_eq!(
            session.route("这是什么部位？"),
            Some(ChatRoute::VisualQa {
                image: FakeFile("xray.png"),
                question: "这是什么部位？".to_string()
            })
        );

        session.toggle_visual_qa().unwrap();
        assert!(matches!(session.route("x"), Some(ChatRoute::Text { .. })));
    }
}
