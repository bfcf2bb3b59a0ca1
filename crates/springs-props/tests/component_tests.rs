use std::cell::RefCell;
use std::rc::Rc;

use springs_core::{AnimatedValue, InterpolateSpec, Value};
use springs_props::{
    Animated, HostComponent, PropBag, PropError, PropField, PropSchema, PropShape, PropValue,
    RefHandle, ResolvedProp, ResolvedProps, SCROLL_TOP, STYLE,
};

/// Test double that records every mount call.
#[derive(Clone, Default)]
struct Probe {
    seen: Rc<RefCell<Vec<(RefHandle, ResolvedProps)>>>,
}

impl HostComponent for Probe {
    fn prop_schema(&self) -> PropSchema {
        PropSchema {
            fields: vec![
                PropField {
                    name: "opacity".into(),
                    shape: PropShape::Number,
                    optional: false,
                },
                PropField {
                    name: "label".into(),
                    shape: PropShape::Text,
                    optional: false,
                },
                PropField {
                    name: STYLE.into(),
                    shape: PropShape::Record(vec![PropField {
                        name: "color".into(),
                        shape: PropShape::Text,
                        optional: false,
                    }]),
                    optional: true,
                },
                PropField {
                    name: "badge".into(),
                    shape: PropShape::Opaque("Icon".into()),
                    optional: true,
                },
            ],
        }
    }

    fn mount(&self, handle: &RefHandle, props: &ResolvedProps) {
        self.seen.borrow_mut().push((*handle, props.clone()));
    }
}

fn base_bag() -> PropBag {
    PropBag::new()
        .with("opacity", PropValue::Literal(Value::n(1.0)))
        .with("label", PropValue::Literal(Value::t("hello")))
}

/// it should resolve animated props to current literals and forward the handle
#[test]
fn render_resolves_and_forwards() {
    let probe = Probe::default();
    let seen = probe.seen.clone();
    let wrapped = Animated::wrap(probe);

    let progress = AnimatedValue::new(Value::n(0.25)).unwrap();
    let opacity = progress
        .interpolate(
            InterpolateSpec::arrays(vec![0.0, 1.0], vec![Value::n(0.0), Value::n(1.0)]).unwrap(),
        )
        .unwrap();
    let props = base_bag().with("opacity", PropValue::Spring(opacity));

    wrapped.render(&RefHandle(7), &props).unwrap();
    progress.set(Value::n(1.0)).unwrap();
    wrapped.render(&RefHandle(7), &props).unwrap();

    let calls = seen.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, RefHandle(7));
    assert_eq!(calls[0].1.value("opacity"), Some(&Value::n(0.25)));
    assert_eq!(calls[1].1.value("opacity"), Some(&Value::n(1.0)));
    assert_eq!(calls[0].1.value("label"), Some(&Value::t("hello")));
}

/// it should resolve animated entries nested in the style record
#[test]
fn style_record_resolves() {
    let probe = Probe::default();
    let seen = probe.seen.clone();
    let wrapped = Animated::wrap(probe);

    let progress = AnimatedValue::new(Value::n(0.0)).unwrap();
    let color = progress
        .interpolate(
            InterpolateSpec::arrays(
                vec![0.0, 1.0],
                vec![Value::t("yellow"), Value::t("red")],
            )
            .unwrap(),
        )
        .unwrap();
    let props = base_bag().with(
        STYLE,
        PropValue::Nested(PropBag::new().with("color", PropValue::Spring(color))),
    );

    wrapped.render(&RefHandle(1), &props).unwrap();
    let calls = seen.borrow();
    match calls[0].1.get(STYLE) {
        Some(ResolvedProp::Record(style)) => {
            assert_eq!(style.value("color"), Some(&Value::t("rgba(255, 255, 0, 1)")));
        }
        other => panic!("style should resolve to a record, got {other:?}"),
    }
}

/// it should expose scroll offsets unresolved for direct host mutation
#[test]
fn scroll_offsets_skip_resolution() {
    let probe = Probe::default();
    let seen = probe.seen.clone();
    let wrapped = Animated::wrap(probe);

    let offset = AnimatedValue::new(Value::n(120.0)).unwrap();
    let props = base_bag().with(SCROLL_TOP, PropValue::Spring(offset));

    wrapped.render(&RefHandle(3), &props).unwrap();
    let calls = seen.borrow();
    assert!(calls[0].1.get(SCROLL_TOP).is_none());

    let (left, top) = props.scroll_offsets();
    assert!(left.is_none());
    assert_eq!(top.unwrap().get_value(), Value::n(120.0));
}

/// it should reject bags that violate the widened schema
#[test]
fn validation_failures() {
    let wrapped = Animated::wrap(Probe::default());
    let spring = AnimatedValue::new(Value::n(0.0)).unwrap();

    let unknown = base_bag().with("bogus", PropValue::Literal(Value::n(0.0)));
    assert!(matches!(
        wrapped.render(&RefHandle(0), &unknown),
        Err(PropError::UnknownProp(name)) if name == "bogus"
    ));

    let missing = PropBag::new().with("opacity", PropValue::Literal(Value::n(1.0)));
    assert!(matches!(
        wrapped.render(&RefHandle(0), &missing),
        Err(PropError::MissingProp(name)) if name == "label"
    ));

    // `badge` is opaque: animated values are not legal there.
    let animated_badge = base_bag().with("badge", PropValue::Spring(spring.clone()));
    assert!(matches!(
        wrapped.render(&RefHandle(0), &animated_badge),
        Err(PropError::AnimatedNotAllowed { name }) if name == "badge"
    ));

    // `label` accepts text; a numeric spring is the wrong shape.
    let numeric_label = base_bag().with("label", PropValue::Spring(spring.clone()));
    assert!(matches!(
        wrapped.render(&RefHandle(0), &numeric_label),
        Err(PropError::AnimatedKindMismatch { name, .. }) if name == "label"
    ));

    // Scroll offsets only take animated values.
    let literal_scroll = base_bag().with(SCROLL_TOP, PropValue::Literal(Value::n(1.0)));
    assert!(matches!(
        wrapped.render(&RefHandle(0), &literal_scroll),
        Err(PropError::AnimatedRequired { name }) if name == SCROLL_TOP
    ));

    // A wrong-kind literal is rejected even though the prop is animatable.
    let bad_literal = base_bag().with("opacity", PropValue::Literal(Value::t("oops")));
    assert!(matches!(
        wrapped.render(&RefHandle(0), &bad_literal),
        Err(PropError::LiteralMismatch { name, .. }) if name == "opacity"
    ));
}

/// it should expose the widened schema for renderer introspection
#[test]
fn wrapper_exposes_schema() {
    let wrapped = Animated::wrap(Probe::default());
    assert_eq!(
        wrapped.schema().field("opacity").unwrap().shape,
        PropShape::animatable(PropShape::Number)
    );
    assert!(wrapped.schema().field(SCROLL_TOP).unwrap().optional);
}
