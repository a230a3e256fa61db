// File: src/render.rs
// Purpose: Render the form's current state as HTML markup

use crate::config::StyleConfig;
use crate::fields::{signup_fields, FieldDef, InputType};
use crate::form::{FieldView, Form};
use maud::{html, Markup};

const INPUT_CLASS: &str = "mt-1 block w-full shadow-sm sm:text-sm border rounded-md";

/// Render one field: label, input and (when visible) its error message
pub fn render_field(def: &FieldDef, view: &FieldView<'_>, style: &StyleConfig) -> Markup {
    let state = view.style();
    let error = view.error.as_deref().filter(|_| state.message_visible);

    match def.input_type {
        InputType::Checkbox => html! {
            div class="mb-4" {
                label class="block text-sm font-medium text-gray-700" {
                    input type="checkbox" id=(def.name) name=(def.name) class="mr-2" checked[view.is_checked()];
                    (def.label)
                }
                @if let Some(message) = error {
                    div class=(style.error_text) { (message) }
                }
            }
        },
        input_type => html! {
            div class="mb-4" {
                label for=(def.name) class="block text-sm font-medium text-gray-700" { (def.label) }
                input
                    id=(def.name)
                    name=(def.name)
                    type=(input_type.as_str())
                    placeholder=[def.placeholder]
                    autocomplete=[def.autocomplete]
                    value=(view.display_value())
                    class={ (INPUT_CLASS) " " (state.border_class(style)) };
                @if let Some(message) = error {
                    div class=(style.error_text) { (message) }
                }
            }
        },
    }
}

/// Render the whole form for the given field definitions
///
/// Definitions naming fields the schema does not contain are skipped.
pub fn render_form(form: &Form, defs: &[FieldDef]) -> Markup {
    let config = form.config();

    html! {
        div class="bg-slate-800 text-white flex flex-col gap-8 p-4" {
            div class="uppercase text-center text-[40px]" { (config.form.title) }
            form class="max-w-md mx-auto p-6 bg-white text-black shadow-md rounded-lg" {
                @for def in defs {
                    @if let Some(view) = form.field(def.name) {
                        (render_field(def, &view, &config.style))
                    }
                }
                button type="submit" class="mt-4 w-full bg-blue-500 hover:bg-blue-600 text-white py-2 px-4 rounded" {
                    (config.form.submit_label)
                }
            }
        }
    }
}

/// Render the signup form with its standard field definitions
pub fn render_signup(form: &Form) -> Markup {
    render_form(form, &signup_fields())
}
