//! Integration tests for TeX to MathML rendering

use texmml::{Document, DocumentOptions, MathStyle, TexError};

fn doc() -> Document {
    Document::with_options(
        Vec::<(&str, &str)>::new(),
        DocumentOptions::new().with_annotation(false),
    )
}

fn body(src: &str) -> String {
    doc().render_body_only(src).unwrap()
}

// ============================================================================
// Basic expressions
// ============================================================================

mod basics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction() {
        assert_eq!(
            body(r"\frac{a+b}{c}"),
            "<mrow><mfrac><mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow><mi>c</mi></mfrac></mrow>"
        );
    }

    #[test]
    fn test_scripts_are_order_independent() {
        let expected = "<mrow><msubsup><mi>x</mi><mi>i</mi><mn>2</mn></msubsup></mrow>";
        assert_eq!(body("x^2_i"), expected);
        assert_eq!(body("x_i^2"), expected);
    }

    #[test]
    fn test_sum_with_limits() {
        assert_eq!(
            body(r"\sum_{k=1}^n k"),
            "<mrow><munderover><mo largeop=\"true\" movablelimits=\"true\">∑</mo>\
             <mrow><mi>k</mi><mo>=</mo><mn>1</mn></mrow><mi>n</mi></munderover><mi>k</mi></mrow>"
        );
    }

    #[test]
    fn test_integral_scripts_stay_on_the_side() {
        let out = body(r"\int_0^1");
        assert!(out.starts_with("<mrow><msubsup><mo largeop=\"true\""), "{}", out);
    }

    #[test]
    fn test_limits_switch() {
        let out = body(r"\int\limits_0^1");
        assert!(out.contains("<munderover>"), "{}", out);
        assert!(out.contains("movablelimits=\"false\""), "{}", out);
    }

    #[test]
    fn test_symbol_membership() {
        assert_eq!(body(r"x \in y"), "<mrow><mi>x</mi><mo>∈</mo><mi>y</mi></mrow>");
    }

    #[test]
    fn test_minus_sign() {
        assert_eq!(body("a-b"), "<mrow><mi>a</mi><mo>−</mo><mi>b</mi></mrow>");
    }

    #[test]
    fn test_primes() {
        assert_eq!(body("f'"), "<mrow><msup><mi>f</mi><mo>′</mo></msup></mrow>");
        assert_eq!(body("f''"), "<mrow><msup><mi>f</mi><mo>″</mo></msup></mrow>");
    }

    #[test]
    fn test_infix_over() {
        assert_eq!(
            body(r"a \over b"),
            "<mrow><mfrac><mi>a</mi><mi>b</mi></mfrac></mrow>"
        );
    }

    #[test]
    fn test_sqrt_and_root() {
        assert_eq!(body(r"\sqrt{x}"), "<mrow><msqrt><mi>x</mi></msqrt></mrow>");
        assert_eq!(
            body(r"\sqrt[3]{x}"),
            "<mrow><mroot><mi>x</mi><mn>3</mn></mroot></mrow>"
        );
    }

    #[test]
    fn test_binomial() {
        assert_eq!(
            body(r"\binom{n}{k}"),
            "<mrow><mo fence=\"true\" stretchy=\"true\">(</mo>\
             <mfrac linethickness=\"0\"><mi>n</mi><mi>k</mi></mfrac>\
             <mo fence=\"true\" stretchy=\"true\">)</mo></mrow>"
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(body(r"a \not= b"), "<mrow><mi>a</mi><mo>≠</mo><mi>b</mi></mrow>");
    }

    #[test]
    fn test_fenced_expression() {
        assert_eq!(
            body(r"\left( x \right)"),
            "<mrow><mo fence=\"true\" stretchy=\"true\">(</mo><mi>x</mi>\
             <mo fence=\"true\" stretchy=\"true\">)</mo></mrow>"
        );
    }

    #[test]
    fn test_escaping() {
        assert_eq!(body("a<b"), "<mrow><mi>a</mi><mo>&lt;</mo><mi>b</mi></mrow>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(body(""), "<mrow></mrow>");
        assert_eq!(body("   "), "<mrow></mrow>");
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_math_variants() {
        assert_eq!(
            body(r"\mathbb{R}"),
            "<mrow><mi mathvariant=\"double-struck\">R</mi></mrow>"
        );
        assert_eq!(
            body(r"\mathcal{A}"),
            "<mrow><mi class=\"calligraphic\" mathvariant=\"script\">A\u{FE00}</mi></mrow>"
        );
    }

    #[test]
    fn test_identifier_command() {
        assert_eq!(
            body(r"\sin x"),
            "<mrow><mi lspace=\"0.11111em\">sin</mi><mi>x</mi></mrow>"
        );
    }

    #[test]
    fn test_operatorname() {
        assert_eq!(
            body(r"\operatorname{foo}"),
            "<mrow><mi lspace=\"0.11111em\">foo</mi></mrow>"
        );
        assert!(body(r"\operatorname*{argmax}_x").contains("<munder>"));
    }

    #[test]
    fn test_color_switch_covers_rest_of_row() {
        assert_eq!(
            body(r"\color{red} x y"),
            "<mrow><mstyle mathcolor=\"red\"><mi>x</mi><mi>y</mi></mstyle></mrow>"
        );
    }

    #[test]
    fn test_style_switch() {
        assert_eq!(
            body(r"\displaystyle x"),
            "<mrow><mstyle displaystyle=\"true\" scriptlevel=\"0\"><mi>x</mi></mstyle></mrow>"
        );
    }

    #[test]
    fn test_spaces_merge() {
        assert_eq!(
            body(r"a\,\,b"),
            "<mrow><mi>a</mi><mspace width=\"0.33333em\"></mspace><mi>b</mi></mrow>"
        );
        assert!(body(r"a\quad b").contains("<mspace width=\"1em\"></mspace>"));
    }

    #[test]
    fn test_explicit_dimensions() {
        assert!(body(r"a\hspace{1cm}b").contains("<mspace width=\"1cm\"></mspace>"));
        assert!(body(r"a\mkern9mu b").contains("<mspace width=\"0.5em\"></mspace>"));
        assert!(body(r"a\kern{2pt}b").contains("<mspace width=\"2pt\"></mspace>"));
    }

    #[test]
    fn test_text() {
        assert_eq!(body(r"\text{a b}"), "<mrow><mtext>a b</mtext></mrow>");
        assert!(body(r"\textbf{ab}").contains("<mtext mathvariant=\"bold\">ab</mtext>"));
    }

    #[test]
    fn test_accents() {
        let out = body(r"\hat{x}");
        assert!(out.starts_with("<mrow><mover accent=\"true\">"), "{}", out);
        assert!(out.contains("font-feature-settings: 'dtls' on;"), "{}", out);
    }

    #[test]
    fn test_overset_and_underbrace() {
        assert!(body(r"\overset{!}{=}").contains("<mover><mo stretchy=\"true\">=</mo>"));
        assert!(body(r"\underbrace{a+b}_{n}").contains("<munder><munder>"));
    }

    #[test]
    fn test_cancel() {
        assert!(body(r"\cancel{x}").contains("<menclose notation=\"updiagonalstrike\">"));
        assert!(body(r"\boxed{x}").contains("<menclose notation=\"box\">"));
    }

    #[test]
    fn test_xrightarrow() {
        let out = body(r"\xrightarrow[b]{a}");
        assert!(out.contains("<munderover><mo stretchy=\"true\">→</mo><mi>b</mi><mi>a</mi></munderover>"), "{}", out);
    }

    #[test]
    fn test_precompiled_operator() {
        let out = body(r"\varinjlim_{i} x");
        assert!(out.contains("<munder><munder"), "{}", out);
    }

    #[test]
    fn test_logo() {
        let out = body(r"\LaTeX");
        assert!(out.contains("<mtext>L</mtext>"));
        assert!(out.contains("<mtext>X</mtext>"));
    }

    #[test]
    fn test_tilde_is_nonbreaking_space() {
        assert_eq!(body("a~b"), "<mrow><mi>a</mi><mtext>\u{a0}</mtext><mi>b</mi></mrow>");
    }
}

// ============================================================================
// Errors
// ============================================================================

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            body(r"\foo"),
            "<mrow><merror title=\"unknown command \\foo\">foo</merror></mrow>"
        );
    }

    #[test]
    fn test_unknown_command_as_operator() {
        let mut d = Document::with_options(
            Vec::<(&str, &str)>::new(),
            DocumentOptions::new().with_unknown_commands_as_ops(true),
        );
        assert_eq!(d.render_body_only(r"\foo").unwrap(), "<mrow><mo>foo</mo></mrow>");
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(
            body(r"\frac{a}"),
            "<mrow><merror title=\"\\frac expects 2 argument(s), got 1\">frac</merror></mrow>"
        );
        assert_eq!(
            body(r"\frac"),
            "<mrow><merror title=\"frac requires one or more arguments\">frac</merror></mrow>"
        );
    }

    #[test]
    fn test_unbalanced_braces_fail() {
        let err = doc().render_body_only("{x").unwrap_err();
        assert!(matches!(err, TexError::MismatchedBrace { .. }), "{:?}", err);
        let err = doc().render_body_only("x}").unwrap_err();
        assert!(matches!(err, TexError::MismatchedBrace { .. }), "{:?}", err);
    }

    #[test]
    fn test_unexpanded_macro_argument() {
        assert!(body("#1").contains("<merror title=\"unexpanded macro argument\">?1</merror>"));
    }
}

// ============================================================================
// Document output
// ============================================================================

mod document {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_math_element() {
        let out = doc().render("x", MathStyle::Display).unwrap();
        assert_eq!(
            out,
            "<math class=\"math-displaystyle\" display=\"block\" displaystyle=\"true\" \
             style=\"font-feature-settings: 'dtls' off;\" xmlns=\"http://www.w3.org/1998/Math/MathML\">\
             <mrow><mi>x</mi></mrow></math>"
        );
    }

    #[test]
    fn test_script_style() {
        let out = doc().render("x", MathStyle::Script).unwrap();
        assert!(out.contains("scriptlevel=\"1\""));
    }

    #[test]
    fn test_annotation() {
        let out = texmml::tex_to_mathml("a<b", MathStyle::Inline).unwrap();
        assert!(out.contains("<semantics><mrow>"));
        assert!(out.ends_with(
            "<annotation encoding=\"application/x-tex\">a&lt;b</annotation></semantics></math>"
        ));
    }

    #[test]
    fn test_output_is_deterministic() {
        let src = r"\begin{pmatrix} a & b \\ c & d \end{pmatrix} \sum_{i=1}^n \frac{x_i}{2}";
        let a = doc().render(src, MathStyle::Display).unwrap();
        let b = doc().render(src, MathStyle::Display).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pretty_output() {
        let mut d = Document::with_options(
            Vec::<(&str, &str)>::new(),
            DocumentOptions::new().with_annotation(false).with_pretty(true),
        );
        let out = d.render_body_only("x+1").unwrap();
        assert_eq!(out, "<mrow>\n  <mi>x</mi>\n  <mo>+</mo>\n  <mn>1</mn>\n</mrow>");
    }

    #[test]
    fn test_options_from_json() {
        let options = DocumentOptions::from_json(r#"{"numbering": true}"#).unwrap();
        assert!(options.numbering);
        assert!(options.annotate);
        assert!(!options.unknown_commands_as_ops);
    }
}
