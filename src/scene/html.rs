use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::figure::Figure;

/// External rendering collaborator: takes a complete figure and requests
/// display. No contract beyond "rendering was requested".
pub trait Renderer {
    fn render(&self, figure: &Figure) -> Result<()>;
}

/// Renderer that writes a self-contained HTML page embedding the figure
/// JSON and loading plotly.js from a CDN; opening the page in a browser
/// shows the interactive scene.
pub struct HtmlRenderer {
    out: PathBuf,
}

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

impl HtmlRenderer {
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self { out: out.into() }
    }

    /// Render the figure into the HTML page body
    pub fn render_to_string(figure: &Figure) -> Result<String> {
        let json = figure
            .to_json()
            .context("Failed to serialize figure to JSON")?;
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="viz" style="width:100%;height:100vh;"></div>
<script>
const fig = {json};
Plotly.newPlot("viz", fig.data, fig.layout).then(function () {{
  Plotly.addFrames("viz", fig.frames);
}});
</script>
</body>
</html>
"#,
            title = figure.layout.title,
            cdn = PLOTLY_CDN,
            json = json,
        ))
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, figure: &Figure) -> Result<()> {
        let page = Self::render_to_string(figure)?;
        fs::write(&self.out, page)
            .with_context(|| format!("Failed to write {}", self.out.display()))?;
        Ok(())
    }
}
