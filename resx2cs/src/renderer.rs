//! Renders resource entries into a C# strongly typed resource class.
//!
//! The output is a pure function of its inputs so regenerating an unchanged
//! `.resx` file yields byte-identical source.

use crate::{
    text,
    types::{AccessModifier, ResourceEntry},
};

const AUTO_GENERATED_HEADER: &[&str] = &[
    "//------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//\t This code was generated by a tool.",
    "//",
    "//\t Changes to this file may cause incorrect behavior and will be lost if",
    "//\t the code is regenerated.",
    "// </auto-generated>",
    "//------------------------------------------------------------------------------",
];

const USINGS: &[&str] = &[
    "using System;",
    "using System.Globalization;",
    "using System.Reflection;",
    "using System.Resources;",
];

/// Line-oriented writer with tab indentation.
#[derive(Debug, Default)]
struct CodeWriter {
    indent_level: usize,
    buffer: String,
}

impl CodeWriter {
    fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// A line at column zero regardless of indentation (preprocessor directives).
    fn directive(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    fn lines(self, lines: &[&str]) -> Self {
        lines.iter().fold(self, |w, l| w.line(l))
    }

    fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Writes `{`, the body one level deeper, then `}`.
    fn braced<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.line("{").indent()).dedent().line("}")
    }

    fn summary(self, text: &str) -> Self {
        self.line("/// <summary>")
            .line(&format!("/// {}", text))
            .line("/// </summary>")
    }

    fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    fn build(self) -> String {
        self.buffer
    }
}

/// Renders the C# source of the resource class `resource_name` in
/// `resource_namespace`.
///
/// One read-only property is emitted per entry, in document order. Entry
/// names are used verbatim as property names.
pub fn render(
    resource_name: &str,
    resource_namespace: &str,
    entries: &[ResourceEntry],
    access_modifier: AccessModifier,
) -> String {
    let modifier = access_modifier.keyword();

    CodeWriter::default()
        .lines(AUTO_GENERATED_HEADER)
        .line(&format!("namespace {}", resource_namespace))
        .braced(|w| {
            w.lines(USINGS)
                .blank()
                .summary("A strongly-typed resource class, for looking up localized strings, etc.")
                .line(&format!("{} class {}", modifier, resource_name))
                .braced(|w| {
                    let w = render_infrastructure(w, resource_name, resource_namespace, modifier);
                    w.each(entries, |w, entry| render_property(w.blank(), entry, modifier))
                        .blank()
                        .line("private static string GetString(string name)")
                        .braced(|w| {
                            w.line("string value = ResourceManager.GetString(name, _resourceCulture);")
                                .blank()
                                .line("return value;")
                        })
                })
        })
        .build()
}

fn render_infrastructure(
    w: CodeWriter,
    resource_name: &str,
    resource_namespace: &str,
    modifier: &str,
) -> CodeWriter {
    w.line("private static Lazy<ResourceManager> _resourceManager =")
        .indent()
        .line("new Lazy<ResourceManager>(() => new ResourceManager(")
        .indent()
        .line(&format!("\"{}.{}\",", resource_namespace, resource_name))
        .directive("#if NET40")
        .line(&format!("typeof({}).Assembly", resource_name))
        .directive("#else")
        .line(&format!("typeof({}).GetTypeInfo().Assembly", resource_name))
        .directive("#endif")
        .dedent()
        .line("));")
        .dedent()
        .blank()
        .line("private static CultureInfo _resourceCulture;")
        .blank()
        .summary("Returns a cached ResourceManager instance used by this class")
        .line(&format!("{} static ResourceManager ResourceManager", modifier))
        .braced(|w| {
            w.line("get")
                .braced(|w| w.line("return _resourceManager.Value;"))
        })
        .blank()
        .line("/// <summary>")
        .line("/// Overrides a current thread's CurrentUICulture property for all")
        .line("/// resource lookups using this strongly typed resource class")
        .line("/// </summary>")
        .line(&format!("{} static CultureInfo Culture", modifier))
        .braced(|w| {
            w.line("get")
                .braced(|w| w.line("return _resourceCulture;"))
                .line("set")
                .braced(|w| w.line("_resourceCulture = value;"))
        })
}

fn render_property(w: CodeWriter, entry: &ResourceEntry, modifier: &str) -> CodeWriter {
    w.summary(&format!(
        "Looks up a localized string similar to \"{}\"",
        text::summarize(&entry.value)
    ))
    .line(&format!("{} static string {}", modifier, entry.name))
    .braced(|w| w.line(&format!("get {{ return GetString(\"{}\"); }}", entry.name)))
}
