//! Static HTML download page for a set of parametric projects.
//!
//! Links follow the asset naming of the model build: previews at
//! `png/<project>.<set>.png`, meshes at `stl/<project>.<set>.stl`, and each
//! variant row carries the id `<project>.<set>`.

use param_format::ParametricDocument;
use serde_json::Value;

use crate::analysis::ProjectAnalysis;
use crate::title::variable_name_to_title;

const PAGE_TITLE: &str = "OpenSCAD Models Download Page";

/// Render the download page for `documents`, in the order given.
pub fn render_catalog(documents: &[ParametricDocument]) -> String {
    let analyses: Vec<ProjectAnalysis> = documents.iter().map(ProjectAnalysis::of).collect();

    let mut out = String::new();
    push_header(&mut out);
    push_table_of_contents(&mut out, documents);
    for (doc, analysis) in documents.iter().zip(&analyses) {
        push_project(&mut out, doc, analysis);
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn push_header(out: &mut String) {
    out.push_str(&format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"utf-8\">\n\
         \x20   <title>{PAGE_TITLE}</title>\n\
         \x20   <link rel=\"stylesheet\" href=\"normalize.css\">\n\
         \x20   <link rel=\"stylesheet\" href=\"style.css\">\n\
         </head>\n\
         <body>\n\
         \x20   <h1>{PAGE_TITLE}</h1>\n\
         \n"
    ));
}

fn push_table_of_contents(out: &mut String, documents: &[ParametricDocument]) {
    out.push_str("    <h2 id=\"toc\">Table Of Content</h2>\n");
    out.push_str("    <ul class=\"toc_list\">\n");
    for doc in documents {
        let project = &doc.project;
        out.push_str(&format!(
            "        <li><a href=\"#{project}\">{}</a></li>\n",
            escape(&variable_name_to_title(project)),
        ));
        out.push_str("        <ul>\n");
        for set_name in doc.parameter_sets.keys() {
            out.push_str(&format!(
                "            <li><a href=\"#{project}.{set_name}\">{}</a></li>\n",
                escape(&variable_name_to_title(set_name)),
            ));
        }
        out.push_str("        </ul>\n");
    }
    out.push_str("    </ul>\n");
}

fn push_project(out: &mut String, doc: &ParametricDocument, analysis: &ProjectAnalysis) {
    let project = &doc.project;
    out.push_str(&format!(
        "    <h2 id=\"{project}\">{}</h2>\n",
        escape(&variable_name_to_title(project)),
    ));

    // Common parameters
    out.push_str("    <h3 id=\"constants\">Common Parameters</h3>\n");
    out.push_str(
        "    <p>These are common values that are same in all variants below and is placed here to reduce clutter in the download list:</p>\n",
    );
    out.push_str("    <ul>\n");
    for (key, value) in analysis.common_parameters() {
        out.push_str(&format!("        {}\n", parameter_item(key, value)));
    }
    out.push_str("    </ul>\n");

    // Download table
    out.push_str("    <h3 id=\"download\">Download</h3>\n");
    out.push_str("    <table>\n");
    out.push_str("        <tr>\n");
    for heading in ["Preview", "Name", "Parameters", "Download STL", "Table Of Content"] {
        out.push_str(&format!("            <th>{heading}</th>\n"));
    }
    out.push_str("        </tr>\n");

    for (set_name, set) in &doc.parameter_sets {
        let variant = format!("{project}.{set_name}");
        out.push_str("\n        <tr>\n");
        out.push_str(&format!(
            "            <th><a href=\"png/{variant}.png\"><img src=\"png/{variant}.png\" alt=\"OpenSCAD generated preview of {}\" height=\"100\"></a></th>\n",
            escape(set_name),
        ));
        out.push_str(&format!(
            "            <th id=\"{variant}\">{}</th>\n",
            escape(&variable_name_to_title(set_name)),
        ));
        out.push_str("            <th>\n");
        out.push_str("                <ul class=\"parameters\">\n");
        for (key, value) in analysis.variable_parameters(set) {
            out.push_str(&format!("                    {}\n", parameter_item(key, value)));
        }
        out.push_str("                </ul>\n");
        out.push_str("            </th>\n");
        out.push_str(&format!(
            "            <th><a href=\"stl/{variant}.stl\" download>{}.stl</a></th>\n",
            escape(&variant),
        ));
        out.push_str("            <th><a href=\"#toc\">TOC</a></th>\n");
        out.push_str("        </tr>\n");
    }
    out.push_str("    </table>\n");
}

fn parameter_item(key: &str, value: &Value) -> String {
    format!(
        "<li><b>{}</b> : {} </li>",
        escape(key),
        escape(&display_value(value))
    )
}

/// Text shown for a parameter value: strings as-is, anything else as
/// compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
