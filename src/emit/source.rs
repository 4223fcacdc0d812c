//! Declarations and definitions text.
//!
//! Both files share one layout: an outer namespace, the section constants,
//! a separator, then one block per section holding its message constants.
//! Sections with an empty name contribute their keys without a block.

use crate::config::Config;

use super::ids::{IdTable, SectionIds};

const BANNER: &str = "// Automatically generated message ID definitions.";
const SEPARATOR: &str = "//////////////////////////////////////////////////////////////////////////";
const SECTION_SUFFIX: &str = "Section";

/// Line-oriented text buffer with a fixed line terminator.
struct SourceWriter {
    out: String,
    eol: &'static str,
}

impl SourceWriter {
    fn new(config: &Config) -> Self {
        Self {
            out: String::new(),
            eol: config.line_ending.as_str(),
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str(self.eol);
    }

    fn blank(&mut self) {
        self.out.push_str(self.eol);
    }

    fn open_namespace(&mut self, name: &str) {
        self.line(&format!("namespace {} {{", name));
        self.blank();
    }

    fn close_namespace(&mut self, name: &str) {
        self.line(&format!("}}\t// namespace {}.", name));
    }

    fn finish(self) -> String {
        self.out
    }
}

/// How each constant is printed.
#[derive(Clone, Copy)]
enum Style {
    Declaration,
    Definition,
}

impl Style {
    fn constant(self, name: &str, id: u32) -> String {
        match self {
            Style::Declaration => format!("extern const int {};", name),
            Style::Definition => format!("extern const int {} = {};", name, id),
        }
    }
}

/// Render the declarations text.
pub fn render_declarations(ids: &IdTable<'_>, config: &Config) -> String {
    let mut w = SourceWriter::new(config);
    render_body(&mut w, ids, config, Style::Declaration);
    w.finish()
}

/// Render the definitions text.
///
/// `declaration_file` is the file name the definitions include.
pub fn render_definitions(ids: &IdTable<'_>, config: &Config, declaration_file: &str) -> String {
    let mut w = SourceWriter::new(config);
    for line in &config.prelude {
        w.line(line);
    }
    if !config.prelude.is_empty() {
        w.blank();
    }
    w.line(&format!("#include <{}>", declaration_file));
    w.blank();
    render_body(&mut w, ids, config, Style::Definition);
    w.finish()
}

fn render_body(w: &mut SourceWriter, ids: &IdTable<'_>, config: &Config, style: Style) {
    w.line(BANNER);
    w.open_namespace(&config.namespace);

    for section in ids.sections() {
        if let Some(id) = section.section_id {
            let name = format!("{}{}", section.section.name(), SECTION_SUFFIX);
            w.line(&style.constant(&name, id));
        }
    }
    w.line(SEPARATOR);
    w.blank();

    for section in ids.sections() {
        render_section(w, section, style);
    }

    w.line(SEPARATOR);
    w.blank();
    w.close_namespace(&config.namespace);
}

fn render_section(w: &mut SourceWriter, section: &SectionIds<'_>, style: Style) {
    let name = section.section.name();
    if section.section.has_name() {
        w.open_namespace(name);
    }

    for (id, key, _) in section.messages() {
        w.line(&style.constant(key, id));
    }

    if section.section.has_name() {
        w.blank();
        w.close_namespace(name);
        w.blank();
    }
}
