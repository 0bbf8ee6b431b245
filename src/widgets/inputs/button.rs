use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::document::Element;
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, WidgetAction,
};

pub struct ButtonInput {
    base: WidgetBase,
    text: String,
    clicks: u64,
}

impl ButtonInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            base: WidgetBase::new(id, label.clone()),
            text: label,
            clicks: 0,
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn activate(&mut self) -> InteractionResult {
        self.clicks = self.clicks.saturating_add(1);
        InteractionResult::with_action(WidgetAction::Activated {
            id: self.base.id().to_string(),
        })
    }
}

impl Drawable for ButtonInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        DrawOutput::single(
            Element::button(self.text.clone())
                .with_id(self.base.id())
                .focused(self.base.is_focused(ctx)),
        )
    }
}

impl Interactive for ButtonInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => InteractionResult::ignored(),
        }
    }
}
