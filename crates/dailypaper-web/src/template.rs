use axum::response::Html;
use minijinja::{Environment, context};

use dailypaper_core::Session;
use dailypaper_core::view::{AI4SCIENCE_TAG, PERTURBATION_TAG};

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Build the template environment. `.html` templates are auto-escaped, so
/// titles and summaries from the feed are always inserted as text.
pub fn build_env() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_HTML)?;
    Ok(env)
}

/// Render the feed page for a session.
pub fn render_index(env: &Environment<'static>, session: &Session) -> Result<Html<String>, String> {
    let view = session.view();
    let ctx = context! {
        dates => session.dates().as_slice(),
        selected_date => session.selected_date(),
        categories => session.categories(),
        filter => session.filter(),
        state => view.label(),
        message => view.message(),
        cards => view.cards(),
        total => session.papers().len(),
        skipped => session.skipped(),
        ai_tag => AI4SCIENCE_TAG,
        perturbation_tag => PERTURBATION_TAG,
    };
    let template = env.get_template("index.html").map_err(|e| e.to_string())?;
    let rendered = template.render(ctx).map_err(|e| e.to_string())?;
    Ok(Html(rendered))
}
