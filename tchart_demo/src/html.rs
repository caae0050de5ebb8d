// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for the demo gallery.

/// One demo: a heading and its inline SVG.
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) svg: String,
}

/// Renders the sections into one standalone HTML page.
pub(crate) fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<meta charset=\"utf-8\"><title>{title}</title>\n"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}section{margin-bottom:2em}</style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
