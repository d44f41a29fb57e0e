// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PPD document parser.
//
// Two passes: the text is first split into statements
// (`*Key Option/Translation: Value`), then the statements are grouped into
// OpenUI/CloseUI option groups and scalar attributes. Broken structure is
// recorded as diagnostics and parsing carries on with what it has.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use cloudcap_core::diagnostics::{Diagnostic, Diagnostics};
use cloudcap_core::error::{CloudcapError, Result};

/// Prefix of the statement that selects a group's default option.
const DEFAULT_PREFIX: &str = "Default";

/// `*OpenGroup` name under which hardware (not job) options are declared.
const INSTALLABLE_OPTIONS: &str = "InstallableOptions";

/// One PPD statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Main keyword without the leading `*`.
    pub key: String,
    /// Option keyword, e.g. `A4` in `*PageSize A4/A4: "..."`.
    pub option: Option<String>,
    /// Human-readable translation string, hex substrings decoded.
    pub translation: Option<String>,
    /// Statement value; quoted payloads are kept verbatim without the quotes.
    pub value: String,
    /// 1-based line the statement starts on.
    pub line: usize,
}

/// The UI type declared by `*OpenUI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiType {
    PickOne,
    PickMany,
    Boolean,
    Unknown,
}

impl UiType {
    fn from_value(value: &str) -> Self {
        match value.trim() {
            "PickOne" => Self::PickOne,
            "PickMany" => Self::PickMany,
            "Boolean" => Self::Boolean,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for UiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PickOne => "PickOne",
            Self::PickMany => "PickMany",
            Self::Boolean => "Boolean",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One choice inside an option group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpdOption {
    pub name: String,
    pub translation: Option<String>,
    pub value: String,
    /// Whether this option is the group's `*Default<Key>`.
    pub default: bool,
    pub line: usize,
}

impl PpdOption {
    /// Translation string, falling back to the option name.
    pub fn label(&self) -> &str {
        self.translation.as_deref().unwrap_or(&self.name)
    }
}

/// The options declared between `*OpenUI *<Key>` and `*CloseUI: *<Key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub key: String,
    pub label: Option<String>,
    pub ui_type: UiType,
    /// Options in declaration order, names unique.
    pub options: Vec<PpdOption>,
    /// Value of `*Default<Key>`, whether or not it names an option.
    pub default_choice: Option<String>,
    /// Declared inside `*OpenGroup: InstallableOptions`.
    pub installable: bool,
    pub line: usize,
}

impl OptionGroup {
    fn open(key: String, label: Option<String>, ui_type: UiType, installable: bool, line: usize) -> Self {
        Self {
            key,
            label,
            ui_type,
            options: Vec::new(),
            default_choice: None,
            installable,
            line,
        }
    }

    /// Group label, falling back to the key.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }

    /// The option marked as default, if the default resolved.
    pub fn default_option(&self) -> Option<&PpdOption> {
        self.options.iter().find(|o| o.default)
    }

    /// Add an option; a repeated name replaces the earlier one in place.
    fn add_option(&mut self, statement: &Statement, name: String, diagnostics: &mut Diagnostics) {
        let option = PpdOption {
            name,
            translation: statement.translation.clone(),
            value: statement.value.clone(),
            default: false,
            line: statement.line,
        };
        match self.options.iter_mut().find(|o| o.name == option.name) {
            Some(existing) => {
                diagnostics.push(
                    Diagnostic::structural(format!(
                        "option {} declared again (first on line {}); the later declaration wins",
                        option.name, existing.line
                    ))
                    .at_line(statement.line)
                    .for_key(&self.key),
                );
                *existing = option;
            }
            None => self.options.push(option),
        }
    }

    /// Mark the option named by `*Default<Key>`.
    fn resolve_default(&mut self, choice: Option<&str>, diagnostics: &mut Diagnostics) {
        let Some(choice) = choice else {
            diagnostics.push(
                Diagnostic::structural("group has no default option")
                    .at_line(self.line)
                    .for_key(&self.key),
            );
            return;
        };
        let mut found = false;
        for option in &mut self.options {
            option.default = option.name == choice;
            found |= option.default;
        }
        if !found {
            diagnostics.push(
                Diagnostic::unrecognized(format!("default {choice} names no option of the group"))
                    .at_line(self.line)
                    .for_key(&self.key),
            );
        }
        self.default_choice = Some(choice.to_string());
    }
}

/// A parsed PPD document.
#[derive(Debug, Clone, Default)]
pub struct PpdDocument {
    statements: Vec<Statement>,
    groups: Vec<OptionGroup>,
    attributes: HashMap<String, Statement>,
    option_attributes: HashMap<(String, String), Statement>,
    diagnostics: Diagnostics,
}

impl PpdDocument {
    /// Every statement, in document order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Option groups in the order their `*OpenUI` appears.
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// The last group declared for `key`.
    pub fn group(&self, key: &str) -> Option<&OptionGroup> {
        self.groups.iter().rev().find(|g| g.key == key)
    }

    /// A scalar attribute outside any UI group (last declaration wins).
    pub fn attribute(&self, key: &str) -> Option<&Statement> {
        self.attributes.get(key)
    }

    /// Trimmed value of a scalar attribute.
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attribute(key).map(|s| s.value.trim())
    }

    /// An option-keyed statement outside any UI group, e.g. `*PaperDimension A4`.
    pub fn option_attribute(&self, key: &str, option: &str) -> Option<&Statement> {
        self.option_attributes
            .get(&(key.to_string(), option.to_string()))
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

/// Parse PPD text.
///
/// Only text with no PPD statements at all is an error; every other problem
/// is recorded in [`PpdDocument::diagnostics`].
pub fn parse_ppd(text: &str) -> Result<PpdDocument> {
    let mut diagnostics = Diagnostics::new();
    let statements = scan_statements(text, &mut diagnostics);

    if statements.is_empty() {
        return Err(CloudcapError::NotPpd("no PPD statements found".into()));
    }
    if statements[0].key != "PPD-Adobe" {
        diagnostics.push(
            Diagnostic::structural("document does not start with *PPD-Adobe")
                .at_line(statements[0].line),
        );
    }

    let document = group_statements(statements, diagnostics);
    debug!(
        statements = document.statements.len(),
        groups = document.groups.len(),
        diagnostics = document.diagnostics.len(),
        "parsed PPD"
    );
    Ok(document)
}

// -- Pass 1: statements -------------------------------------------------------

/// A quoted value still waiting for its closing quote.
struct PendingValue {
    key: String,
    option: Option<String>,
    translation: Option<String>,
    value: String,
    line: usize,
}

impl PendingValue {
    fn finish(self) -> Statement {
        Statement {
            key: self.key,
            option: self.option,
            translation: self.translation,
            value: self.value,
            line: self.line,
        }
    }
}

/// Result of parsing one statement line.
enum LineParse {
    Complete(Statement),
    OpenQuote(PendingValue),
}

/// Byte encoding of `<hex>` substrings in translation strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextEncoding {
    Latin1,
    Utf8,
}

impl TextEncoding {
    /// Encoding named by a `*LanguageEncoding` value; anything but UTF-8 is
    /// read as Latin-1.
    fn from_language_encoding(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("UTF-8") || value.eq_ignore_ascii_case("UTF8") {
            TextEncoding::Utf8
        } else {
            TextEncoding::Latin1
        }
    }
}

fn scan_statements(text: &str, diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut pending: Option<PendingValue> = None;
    let mut encoding = TextEncoding::Latin1;

    for (index, line) in split_lines(text).enumerate() {
        let line_no = index + 1;

        if let Some(mut value) = pending.take() {
            value.value.push('\n');
            match line.find('"') {
                Some(end) => {
                    value.value.push_str(&line[..end]);
                    statements.push(value.finish());
                }
                None => {
                    value.value.push_str(line);
                    pending = Some(value);
                }
            }
            continue;
        }

        // Comments, continuation text, and blank lines.
        let Some(body) = line.strip_prefix('*') else {
            continue;
        };
        // `*End` only closes a multi-line value that is already complete.
        if body.starts_with('%') || body.trim_end() == "End" {
            continue;
        }

        match parse_statement(body, line_no, encoding) {
            Ok(LineParse::Complete(statement)) => {
                if statement.key == "LanguageEncoding" {
                    encoding = TextEncoding::from_language_encoding(&statement.value);
                }
                statements.push(statement);
            }
            Ok(LineParse::OpenQuote(value)) => pending = Some(value),
            Err(message) => diagnostics.push(Diagnostic::structural(message).at_line(line_no)),
        }
    }

    if let Some(value) = pending {
        diagnostics.push(
            Diagnostic::structural("quoted value is never terminated")
                .at_line(value.line)
                .for_key(&value.key),
        );
        statements.push(value.finish());
    }

    statements
}

/// Lines split on LF (CRLF tolerated) or, for old Mac files, on CR alone.
fn split_lines(text: &str) -> Box<dyn Iterator<Item = &str> + '_> {
    if text.contains('\n') {
        Box::new(text.lines())
    } else {
        Box::new(text.split('\r'))
    }
}

/// Parse `Key[ Option][/Translation][: Value]` (the text after `*`).
fn parse_statement(
    body: &str,
    line: usize,
    encoding: TextEncoding,
) -> std::result::Result<LineParse, String> {
    let key_end = body
        .find(|c: char| c.is_whitespace() || c == ':' || c == '/')
        .unwrap_or(body.len());
    let key = &body[..key_end];
    if key.is_empty() {
        return Err(format!("statement has no keyword: *{body}"));
    }
    let mut rest = &body[key_end..];

    let mut option = None;
    if rest.starts_with(|c: char| c.is_whitespace()) {
        let trimmed = rest.trim_start();
        let option_end = trimmed.find(['/', ':']).unwrap_or(trimmed.len());
        let name = trimmed[..option_end].trim_end();
        if !name.is_empty() {
            option = Some(name.to_string());
        }
        rest = &trimmed[option_end..];
    }

    let mut translation = None;
    if let Some(after_slash) = rest.strip_prefix('/') {
        let end = after_slash.find(':').unwrap_or(after_slash.len());
        translation = Some(decode_translation(after_slash[..end].trim(), encoding));
        rest = &after_slash[end..];
    }

    let value = match rest.strip_prefix(':') {
        Some(value) => value.trim_start(),
        None => "",
    };

    if let Some(quoted) = value.strip_prefix('"') {
        return Ok(match quoted.find('"') {
            Some(end) => LineParse::Complete(Statement {
                key: key.to_string(),
                option,
                translation,
                value: quoted[..end].to_string(),
                line,
            }),
            None => LineParse::OpenQuote(PendingValue {
                key: key.to_string(),
                option,
                translation,
                value: quoted.to_string(),
                line,
            }),
        });
    }

    Ok(LineParse::Complete(Statement {
        key: key.to_string(),
        option,
        translation,
        value: value.trim_end().to_string(),
        line,
    }))
}

/// Decode `<hex>` substrings of a translation string in the document's
/// `*LanguageEncoding`.
///
/// Anything that is not valid hex between the brackets is kept literally.
/// Byte sequences that are not valid UTF-8 are replaced with U+FFFD.
fn decode_translation(raw: &str, encoding: TextEncoding) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        out.extend_from_slice(rest[..open].as_bytes());
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            out.extend_from_slice(rest[open..].as_bytes());
            return into_text(out);
        };
        let digits: String = after[..close].chars().filter(|c| !c.is_whitespace()).collect();
        match hex::decode(&digits) {
            Ok(bytes) if !bytes.is_empty() => match encoding {
                TextEncoding::Utf8 => out.extend_from_slice(&bytes),
                TextEncoding::Latin1 => {
                    for byte in bytes {
                        let mut buf = [0u8; 2];
                        out.extend_from_slice(char::from(byte).encode_utf8(&mut buf).as_bytes());
                    }
                }
            },
            _ => out.extend_from_slice(rest[open..open + close + 2].as_bytes()),
        }
        rest = &after[close + 1..];
    }
    out.extend_from_slice(rest.as_bytes());
    into_text(out)
}

fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

// -- Pass 2: groups and attributes ------------------------------------------

fn group_statements(statements: Vec<Statement>, mut diagnostics: Diagnostics) -> PpdDocument {
    let mut groups: Vec<OptionGroup> = Vec::new();
    let mut attributes = HashMap::new();
    let mut option_attributes = HashMap::new();
    let mut defaults: HashMap<String, String> = HashMap::new();
    let mut open: Option<OptionGroup> = None;
    let mut open_sections: Vec<String> = Vec::new();

    for statement in &statements {
        match statement.key.as_str() {
            "OpenUI" | "JCLOpenUI" => {
                if let Some(group) = open.take() {
                    diagnostics.push(
                        Diagnostic::structural(format!(
                            "group is never closed; *{} opens a new group",
                            statement.key
                        ))
                        .at_line(group.line)
                        .for_key(&group.key),
                    );
                    groups.push(group);
                }
                let key = statement
                    .option
                    .as_deref()
                    .map(|o| o.trim_start_matches('*'))
                    .unwrap_or_default();
                if key.is_empty() {
                    diagnostics.push(
                        Diagnostic::structural("*OpenUI names no option keyword")
                            .at_line(statement.line),
                    );
                    continue;
                }
                let installable = open_sections.iter().any(|s| s == INSTALLABLE_OPTIONS);
                open = Some(OptionGroup::open(
                    key.to_string(),
                    statement.translation.clone(),
                    UiType::from_value(&statement.value),
                    installable,
                    statement.line,
                ));
            }
            "CloseUI" | "JCLCloseUI" => {
                let closing = statement.value.trim().trim_start_matches('*');
                match open.take() {
                    Some(group) => {
                        if group.key != closing {
                            diagnostics.push(
                                Diagnostic::structural(format!(
                                    "*{}: *{closing} closes group *{}",
                                    statement.key, group.key
                                ))
                                .at_line(statement.line)
                                .for_key(&group.key),
                            );
                        }
                        groups.push(group);
                    }
                    None => diagnostics.push(
                        Diagnostic::structural(format!("*{} without an open group", statement.key))
                            .at_line(statement.line)
                            .for_key(closing),
                    ),
                }
            }
            "OpenGroup" => {
                open_sections.push(section_name(&statement.value).to_string());
            }
            "CloseGroup" => {
                let name = section_name(&statement.value);
                if open_sections.last().is_some_and(|s| s == name) {
                    open_sections.pop();
                } else {
                    diagnostics.push(
                        Diagnostic::structural(format!("*CloseGroup: {name} without a matching *OpenGroup"))
                            .at_line(statement.line),
                    );
                }
            }
            "Include" => diagnostics.push(
                Diagnostic::ignored("included files are not read")
                    .at_line(statement.line)
                    .for_key("Include"),
            ),
            key => {
                if let Some(target) = key.strip_prefix(DEFAULT_PREFIX).filter(|k| !k.is_empty()) {
                    defaults.insert(target.to_string(), statement.value.trim().to_string());
                }
                match (&mut open, &statement.option) {
                    (Some(group), Some(name)) if group.key == key => {
                        group.add_option(statement, name.clone(), &mut diagnostics);
                    }
                    (_, Some(name)) => {
                        option_attributes.insert((key.to_string(), name.clone()), statement.clone());
                    }
                    (_, None) => {
                        attributes.insert(key.to_string(), statement.clone());
                    }
                }
            }
        }
    }

    if let Some(group) = open {
        diagnostics.push(
            Diagnostic::structural("group is never closed")
                .at_line(group.line)
                .for_key(&group.key),
        );
        groups.push(group);
    }
    for section in open_sections {
        diagnostics.push(Diagnostic::structural(format!("*OpenGroup: {section} is never closed")));
    }

    for group in &mut groups {
        group.resolve_default(defaults.get(&group.key).map(String::as_str), &mut diagnostics);
    }

    PpdDocument {
        statements,
        groups,
        attributes,
        option_attributes,
        diagnostics,
    }
}

/// `InstallableOptions/Options Installed` → `InstallableOptions`.
fn section_name(value: &str) -> &str {
    value.split('/').next().unwrap_or_default().trim()
}
