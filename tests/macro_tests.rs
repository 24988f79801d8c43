//! Macro definition and expansion through the public API

use pretty_assertions::assert_eq;
use texmml::{Document, DocumentOptions, TexError};

fn doc_with(macros: &[(&str, &str)]) -> Document {
    Document::with_options(
        macros.iter().copied(),
        DocumentOptions::new().with_annotation(false),
    )
}

#[test]
fn test_predeclared_macro() {
    let mut d = doc_with(&[("R", r"\mathbb{R}")]);
    assert_eq!(
        d.render_body_only(r"x \in \R").unwrap(),
        "<mrow><mi>x</mi><mo>∈</mo><mi mathvariant=\"double-struck\">R</mi></mrow>"
    );
}

#[test]
fn test_predeclared_macro_with_arguments() {
    let mut d = doc_with(&[("half", r"\frac{#1}{2}")]);
    assert_eq!(
        d.render_body_only(r"\half{x}").unwrap(),
        "<mrow><mfrac><mi>x</mi><mn>2</mn></mfrac></mrow>"
    );
}

#[test]
fn test_nested_predeclared_macros() {
    let mut d = doc_with(&[("RR", r"\R^2"), ("R", r"\mathbb{R}")]);
    assert_eq!(
        d.render_body_only(r"\RR").unwrap(),
        "<mrow><msup><mi mathvariant=\"double-struck\">R</mi><mn>2</mn></msup></mrow>"
    );
}

#[test]
fn test_cyclic_macros() {
    let mut d = doc_with(&[("a", r"\b"), ("b", r"\a")]);
    assert_eq!(
        d.render_body_only(r"\a").unwrap(),
        "<mrow><merror title=\"cyclic dependency in macro definition\">a</merror></mrow>"
    );
}

#[test]
fn test_missing_predeclared_argument_fails() {
    let mut d = doc_with(&[("half", r"\frac{#1}{2}")]);
    let err = d.render_body_only(r"\half").unwrap_err();
    assert!(matches!(err, TexError::BadArgumentCount { .. }), "{:?}", err);
}

#[test]
fn test_newcommand() {
    let mut d = doc_with(&[]);
    assert_eq!(
        d.render_body_only(r"\newcommand{\sq}[1]{#1^2} \sq{x}").unwrap(),
        "<mrow><msup><mi>x</mi><mn>2</mn></msup></mrow>"
    );
}

#[test]
fn test_runtime_macros_persist_between_renders() {
    let mut d = doc_with(&[]);
    d.render_body_only(r"\newcommand{\e}{\mathrm{e}}").unwrap();
    let out = d.render_body_only(r"\e").unwrap();
    assert!(out.contains("<mi mathvariant=\"normal\">e</mi>"), "{}", out);
}

#[test]
fn test_newcommand_does_not_overwrite() {
    let mut d = doc_with(&[]);
    assert_eq!(
        d.render_body_only(r"\newcommand{\v}{x}\newcommand{\v}{y}\v").unwrap(),
        "<mrow><mi>x</mi></mrow>"
    );
    assert_eq!(
        d.render_body_only(r"\renewcommand{\v}{y}\v").unwrap(),
        "<mrow><mi>y</mi></mrow>"
    );
    assert_eq!(
        d.render_body_only(r"\providecommand{\v}{z}\v").unwrap(),
        "<mrow><mi>y</mi></mrow>"
    );
}

#[test]
fn test_optional_argument() {
    let mut d = doc_with(&[]);
    d.render_body_only(r"\newcommand{\f}[2][a]{#1+#2}").unwrap();
    assert_eq!(
        d.render_body_only(r"\f{b}").unwrap(),
        "<mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow>"
    );
    assert_eq!(
        d.render_body_only(r"\f[c]{b}").unwrap(),
        "<mrow><mi>c</mi><mo>+</mo><mi>b</mi></mrow>"
    );
}

#[test]
fn test_def() {
    let mut d = doc_with(&[]);
    assert_eq!(
        d.render_body_only(r"\def\g#1{#1!}\g{z}").unwrap(),
        "<mrow><mi>z</mi><mo>!</mo></mrow>"
    );
}

#[test]
fn test_recursive_definition_is_rejected() {
    let mut d = doc_with(&[]);
    let out = d.render_body_only(r"\newcommand{\r}{\r}").unwrap();
    assert_eq!(
        out,
        "<mrow><merror title=\"recursive macro definition\">\\newcommand</merror></mrow>"
    );
    assert!(!d.macros().contains_key("r"));
}

#[test]
fn test_malformed_definition() {
    let mut d = doc_with(&[]);
    let out = d.render_body_only(r"\newcommand{x}{y}").unwrap();
    assert!(out.contains("<merror title=\"malformed \\newcommand"), "{}", out);
}

#[test]
fn test_runtime_macro_uses_predeclared_ones() {
    let mut d = doc_with(&[("R", r"\mathbb{R}")]);
    let out = d.render_body_only(r"\newcommand{\sp}{\R^n}\sp").unwrap();
    assert_eq!(
        out,
        "<mrow><msup><mi mathvariant=\"double-struck\">R</mi><mi>n</mi></msup></mrow>"
    );
}

#[test]
fn test_add_macros() {
    let mut d = doc_with(&[("R", r"\mathbb{R}")]);
    d.add_macros([("R", r"\mathbf{R}")]);
    assert_eq!(
        d.render_body_only(r"\R").unwrap(),
        "<mrow><mi mathvariant=\"bold\">R</mi></mrow>"
    );
}

#[test]
fn test_mutually_recursive_runtime_macros() {
    let mut d = doc_with(&[]);
    let out = d
        .render_body_only(r"\newcommand{\ping}{\pong}\newcommand{\pong}{\ping}\ping")
        .unwrap();
    assert_eq!(
        out,
        "<mrow><merror title=\"cyclic dependency in macro definition: \\ping\">ping</merror></mrow>"
    );
}

#[test]
fn test_branching_runtime_cycle_terminates() {
    let mut d = doc_with(&[]);
    let out = d
        .render_body_only(r"\newcommand{\ping}{\pong\pong}\newcommand{\pong}{\ping\ping}\ping")
        .unwrap();
    assert!(
        out.contains("<merror title=\"cyclic dependency in macro definition: \\"),
        "{}",
        out
    );

    // the expansion budget is per render
    let out = d.render_body_only(r"\newcommand{\two}{x}\two").unwrap();
    assert_eq!(out, "<mrow><mi>x</mi></mrow>");
}

#[test]
fn test_macro_inside_its_own_argument() {
    let mut d = doc_with(&[]);
    let out = d
        .render_body_only(r"\newcommand{\twice}[1]{#1#1}\twice{\twice{x}}")
        .unwrap();
    assert!(!out.contains("merror"), "{}", out);
    assert_eq!(out.matches("<mi>x</mi>").count(), 4, "{}", out);
}
