/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn unit_schema() {
    use schemars::schema_for;
    use sci_unit::Unit;
    use serde_json::json;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Unit)).unwrap(),
    )
    .unwrap();

    #[cfg(feature = "serialize_as_string")]
    let examples = [json!("m/s"), json!("kg⋅m/(s⋅s)")];
    #[cfg(not(feature = "serialize_as_string"))]
    let examples = [
        json!({ "Atomic": { "Length": { "Meter": "Unit" } } }),
        json!({ "Reciprocal": { "Atomic": { "Time": { "Second": "Unit" } } } }),
    ];

    examples.iter().for_each(|example| {
        schema.validate(example).expect("schema validation failed");
    });
}

#[cfg(feature = "schemars")]
#[test]
fn serialized_units_match_schema() {
    use schemars::schema_for;
    use sci_unit::Unit;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Unit)).unwrap(),
    )
    .unwrap();

    for s in ["km/h", "1/(m⋅s)", "°C", "lb⋅ft/(s⋅s)"] {
        let unit: Unit = s.parse().unwrap();
        let json = serde_json::to_value(&unit).unwrap();
        schema.validate(&json).expect("schema validation failed");
    }
}
