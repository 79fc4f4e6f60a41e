use crate::render::{RenderedResponse, render_response};

use super::{Message, Role};

/// How a message body is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageView {
    /// User text, shown verbatim with its line breaks.
    Plain(String),
    /// Model output run through the render pipeline.
    Rich(RenderedResponse),
}

impl MessageView {
    pub fn of(message: &Message) -> Self {
        let text = message.combined_text();
        match message.role {
            Role::User => MessageView::Plain(text),
            Role::Model => MessageView::Rich(render_response(&text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderNode;

    #[test]
    fn user_text_is_not_parsed() {
        let message = Message::text(Role::User, "# not a heading", 0);
        assert_eq!(
            MessageView::of(&message),
            MessageView::Plain("# not a heading".into())
        );
    }

    #[test]
    fn model_text_is_rendered() {
        let message = Message::text(Role::Model, "# Title", 0);
        let MessageView::Rich(rendered) = MessageView::of(&message) else {
            panic!("expected rich view");
        };
        assert!(matches!(rendered.nodes[0], RenderNode::Heading { level: 1, .. }));
    }
}
