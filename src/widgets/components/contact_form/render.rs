use super::ContactForm;
use crate::ui::document::{Document, Element};
use crate::widgets::outputs::text::Text;
use crate::widgets::traits::{Drawable, RenderContext};

pub(super) fn render_form(form: &ContactForm, ctx: &RenderContext) -> Document {
    let mut doc = Document::new();
    doc.extend(form.header.draw(ctx).elements);

    for (field, input) in &form.inputs {
        doc.extend(input.draw(ctx).elements);
        if let Some(error) = form.validation.visible_error(field.id()) {
            doc.push(
                Element::alert(format!("Error: {error}"))
                    .with_id(format!("{}_error", field.id()))
                    .with_test_id("error"),
            );
        }
    }

    doc.extend(form.submit.draw(ctx).elements);

    if let Some(values) = form.submitted() {
        doc.extend(
            Text::heading("submitted_header", "You Submitted:")
                .draw(ctx)
                .elements,
        );
        for (field, value) in values.entries() {
            let line = Text::new(
                format!("{}_display", field.id()),
                format!("{}: {value}", field.name()),
            )
            .with_test_id(field.display_test_id());
            doc.extend(line.draw(ctx).elements);
        }
    }

    doc
}
