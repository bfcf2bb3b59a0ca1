use springs_props::{
    animate_schema, PropField, PropSchema, PropShape, CHILDREN, SCROLL_LEFT, SCROLL_TOP, STYLE,
};

fn field(name: &str, shape: PropShape) -> PropField {
    PropField {
        name: name.into(),
        shape,
        optional: false,
    }
}

/// it should widen a full component schema end to end
#[test]
fn end_to_end_widening() {
    let schema = PropSchema {
        fields: vec![
            field("opacity", PropShape::Number),
            field("label", PropShape::Text),
            field(
                STYLE,
                PropShape::Record(vec![field("color", PropShape::Text)]),
            ),
            field(CHILDREN, PropShape::Text),
        ],
    };
    let widened = animate_schema(&schema);

    assert_eq!(
        widened.field("opacity").unwrap().shape,
        PropShape::animatable(PropShape::Number)
    );
    assert_eq!(
        widened.field("label").unwrap().shape,
        PropShape::animatable(PropShape::Text)
    );
    assert_eq!(
        widened.field(STYLE).unwrap().shape,
        PropShape::Record(vec![PropField {
            name: "color".into(),
            shape: PropShape::animatable(PropShape::Text),
            optional: false,
        }])
    );
    assert_eq!(
        widened.field(CHILDREN).unwrap().shape,
        PropShape::animatable(PropShape::Text)
    );
    for name in [SCROLL_LEFT, SCROLL_TOP] {
        let f = widened.field(name).unwrap();
        assert!(f.optional);
        assert_eq!(f.shape, PropShape::animated(PropShape::Number));
    }
}

/// it should pass non-scalar, non-style, non-children fields through verbatim
#[test]
fn passthrough_is_verbatim() {
    let icon = field("icon", PropShape::Opaque("Icon".into()));
    let nested = field(
        "layout",
        PropShape::Record(vec![field("x", PropShape::Number)]),
    );
    let schema = PropSchema {
        fields: vec![icon.clone(), nested.clone()],
    };
    let widened = animate_schema(&schema);
    assert_eq!(widened.field("icon"), Some(&icon));
    // Only `style` recurses; other records are untouched.
    assert_eq!(widened.field("layout"), Some(&nested));
}

/// it should inject scroll offsets even into an empty schema
#[test]
fn scroll_props_always_injected() {
    let widened = animate_schema(&PropSchema::default());
    assert_eq!(widened.fields.len(), 2);
    assert!(widened.field(SCROLL_LEFT).is_some());
    assert!(widened.field(SCROLL_TOP).is_some());
}

/// it should replace declared scroll props with the synthetic ones
#[test]
fn declared_scroll_props_are_replaced() {
    let schema = PropSchema {
        fields: vec![field(SCROLL_LEFT, PropShape::Text)],
    };
    let widened = animate_schema(&schema);
    let scroll_fields: Vec<_> = widened
        .fields
        .iter()
        .filter(|f| f.name == SCROLL_LEFT)
        .collect();
    assert_eq!(scroll_fields.len(), 1);
    assert_eq!(
        scroll_fields[0].shape,
        PropShape::animated(PropShape::Number)
    );
}

/// it should force children to animatable text regardless of declaration
#[test]
fn children_forced_to_text() {
    let schema = PropSchema {
        fields: vec![field(CHILDREN, PropShape::Opaque("Node".into()))],
    };
    let widened = animate_schema(&schema);
    assert_eq!(
        widened.field(CHILDREN).unwrap().shape,
        PropShape::animatable(PropShape::Text)
    );
}

/// it should leave non-scalar style fields alone while widening scalars
#[test]
fn style_recursion_skips_non_scalars() {
    let schema = PropSchema {
        fields: vec![field(
            STYLE,
            PropShape::Record(vec![
                field("width", PropShape::Number),
                field("filter", PropShape::Opaque("FilterFn".into())),
            ]),
        )],
    };
    let widened = animate_schema(&schema);
    match &widened.field(STYLE).unwrap().shape {
        PropShape::Record(fields) => {
            assert_eq!(fields[0].shape, PropShape::animatable(PropShape::Number));
            assert_eq!(fields[1].shape, PropShape::Opaque("FilterFn".into()));
        }
        other => panic!("style should stay a record, got {other:?}"),
    }
}

/// it should keep optional flags through the widening
#[test]
fn optional_flags_survive() {
    let schema = PropSchema {
        fields: vec![PropField {
            name: "opacity".into(),
            shape: PropShape::Number,
            optional: true,
        }],
    };
    let widened = animate_schema(&schema);
    assert!(widened.field("opacity").unwrap().optional);
}
