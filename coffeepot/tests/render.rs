use coffeepot::{
    args, kwargs, AlertNode, Configuration, ElementNode, FunctionNode, Generator, GeneratorError,
    JQueryChain, MethodNode, Node, Render, ScriptLibrary, ScriptNode,
};

use std::sync::Once;

static INIT: Once = Once::new();

/// Setup function that is only run once, even if called multiple times.
fn setup() {
    INIT.call_once(env_logger::init);
}

#[test]
fn empty_generator_renders_nothing() {
    setup();

    let generator = Generator::default();
    assert!(generator.is_empty());
    assert_eq!(generator.render(), "");
}

#[test]
fn unnamed_function() {
    setup();

    let mut generator = Generator::default();
    let f = generator.add_function(None, None);
    assert_eq!(f.render(), "function() { }");
}

#[test]
fn named_function() {
    setup();

    let mut generator = Generator::default();
    let f = generator.add_function(Some("steve"), None);
    assert_eq!(f.render(), "steve: function() { }");
}

#[test]
fn element_render() -> Result<(), GeneratorError> {
    setup();

    let mut generator = Generator::default();
    generator
        .add_function(Some("steve"), None)
        .add_element("#bob")
        .hide(args![3], kwargs! { "t" => 2 })?;

    assert_eq!(
        generator.render(),
        r##"steve: function() { $("#bob").hide(3, { t:2 }); };"##
    );

    Ok(())
}

#[test]
fn chained_methods_extend_one_element() -> Result<(), GeneratorError> {
    setup();

    let mut generator = Generator::default();
    let element = generator.add_element("#panel");
    element
        .hide(args![], kwargs!())?
        .html(args!["<b>done</b>"], kwargs!())?
        .show(args!["slow"], kwargs!())?;
    element.add_method("fadeIn", args![200], kwargs!());

    assert_eq!(element.len(), 4);
    assert_eq!(generator.len(), 1);
    assert_eq!(
        generator.render(),
        r##"$("#panel").hide().html("<b>done</b>").show("slow").fadeIn(200);"##
    );

    Ok(())
}

#[test]
fn top_level_nodes_render_in_call_order() -> Result<(), GeneratorError> {
    setup();

    let mut generator = Generator::default();
    generator.add_script("var x = 1");
    generator
        .add_element("#a")
        .click(args![], kwargs!())?;
    generator.add_function(None, None).add_alert("hi");
    generator.add_alert("bye");

    assert_eq!(
        generator.render(),
        "var x = 1;\n$(\"#a\").click();\nfunction() { alert(\"hi\"); };\nalert(\"bye\");"
    );

    Ok(())
}

#[test]
fn render_is_repeatable() {
    setup();

    let mut generator = Generator::default();
    let f = generator.add_function(Some("init"), Some(4));
    f.add_script("a()");
    f.add_node(ScriptNode::new("b()"));

    let first = generator.render();
    assert_eq!(first, "init: function() { a();\n    b(); };");
    assert_eq!(generator.render(), first);
}

#[test]
fn reset_clears_queue() {
    setup();

    let mut generator = Generator::default();
    generator.add_script("x()");
    generator.add_function(None, None);
    assert_eq!(generator.len(), 2);

    generator.reset();
    assert!(generator.is_empty());
    assert_eq!(generator.render(), "");

    generator.add_script("y()");
    assert_eq!(generator.render(), "y();");
}

#[test]
fn element_rejects_non_method_nodes() {
    setup();

    let mut element = ElementNode::new("#bob");
    element.add_method("show", args![], kwargs!());

    let rejected: Vec<Node> = vec![
        ScriptNode::new("x").into(),
        AlertNode::new("no").into(),
        FunctionNode::new(None, None).into(),
        ElementNode::new("#other").into(),
    ];

    for node in rejected {
        assert!(matches!(
            element.add_node(node),
            Err(GeneratorError::InvalidOperation(_))
        ));
    }
    assert_eq!(element.len(), 1);
    assert_eq!(element.render(), r##"$("#bob").show()"##);
}

#[test]
fn element_accepts_method_nodes() -> Result<(), GeneratorError> {
    setup();

    let mut element = ElementNode::new("#bob");
    element.add_node(MethodNode::new("css", args!["color", "red"], kwargs!()))?;

    assert_eq!(element.render(), r##"$("#bob").css("color", "red")"##);

    Ok(())
}

#[test]
fn unregistered_chain_method_is_rejected() {
    setup();

    let mut generator = Generator::default();
    let element = generator.add_element("#bob");

    let result = element.invoke("fadeIn", args![], kwargs!());
    assert!(matches!(result, Err(GeneratorError::InvalidOperation(_))));
    assert!(element.is_empty());
}

#[test]
fn chain_method_arity_is_checked() {
    setup();

    let mut generator = Generator::default();
    let element = generator.add_element("#list");

    assert!(matches!(
        element.append(args![], kwargs!()),
        Err(GeneratorError::InvalidOperation(_))
    ));
    assert!(element.is_empty());

    assert!(element.insert_before(args!["#anchor"], kwargs!()).is_ok());
    assert_eq!(element.render(), r##"$("#list").insertBefore("#anchor")"##);
}

#[test]
fn library_none_has_no_chain_methods() {
    setup();

    let config = Configuration::default().with_script_library(ScriptLibrary::None);
    let mut generator = Generator::new(config);
    let element = generator.add_element("#bob");

    assert!(matches!(
        element.hide(args![], kwargs!()),
        Err(GeneratorError::InvalidOperation(_))
    ));

    element.add_method("hide", args![], kwargs!());
    assert_eq!(generator.render(), r##"$("#bob").hide();"##);
}

#[test]
fn nested_elements_inherit_library() {
    setup();

    let config = Configuration::default().with_script_library(ScriptLibrary::None);
    let mut generator = Generator::new(config);
    let element = generator
        .add_function(None, None)
        .add_function(Some("inner"), None)
        .add_element("#x");

    assert_eq!(element.library(), ScriptLibrary::None);
}

#[test]
fn nested_arguments() -> Result<(), GeneratorError> {
    setup();

    let mut generator = Generator::default();
    generator.add_element("#box").show(
        args![vec!["a", "b"]],
        kwargs! { "duration" => 400, "queue" => false, "opts" => kwargs! { "x" => 1 } },
    )?;

    assert_eq!(
        generator.render(),
        r##"$("#box").show(["a", "b"], { duration:400, queue:false, opts:{ x:1 } });"##
    );

    Ok(())
}
