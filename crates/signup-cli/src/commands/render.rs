use super::{fill, read_values};
use anyhow::Result;
use signup_form::{render_signup, Config, Form};
use std::path::Path;

/// Print the form as HTML, optionally filled from a values file
pub fn execute(config: Config, values: Option<&Path>, touch_all: bool) -> Result<()> {
    let mut form = Form::signup(config);

    if let Some(path) = values {
        fill(&mut form, &read_values(path)?)?;
    }

    if touch_all {
        let names: Vec<String> = form.schema().field_names().map(str::to_string).collect();
        for name in &names {
            form.blur(name)?;
        }
    }

    println!("{}", render_signup(&form).into_string());
    Ok(())
}
