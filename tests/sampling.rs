use plotcalc::{
    Error, SymbolTable,
    error::{ParseError, RuntimeError, SampleError},
    interpreter::sampling::{SAMPLE_VARIABLE, SampleRange, function_body, sample},
};
use rstest::rstest;

fn plot(function: &str, x_min: f64, x_max: f64, step: f64) -> Result<Vec<(f64, f64)>, SampleError> {
    let body = function_body(function)?;
    let range = SampleRange::new(x_min, x_max, step)?;
    sample(body, &range, &mut SymbolTable::new())
}

#[test]
fn squares_over_unit_steps() {
    assert_eq!(plot("y = x^2", 0.0, 2.0, 1.0).unwrap(),
               vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
}

#[test]
fn implied_multiplication_and_functions_in_body() {
    let points = plot("y = 2x + sin(0)", -1.0, 1.0, 0.5).unwrap();
    let ys: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    assert_eq!(ys, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn fine_step_keeps_both_endpoints() {
    let points = plot("y = x", -10.0, 10.0, 0.1).unwrap();
    assert_eq!(points.len(), 201);
    assert_eq!(points[0], (-10.0, -10.0));
    assert!((points[200].0 - 10.0).abs() < 1e-9);
}

#[test]
fn sampled_variable_is_left_at_last_point() {
    let mut symbols = SymbolTable::new();
    let range = SampleRange::new(0.0, 3.0, 1.0).unwrap();
    sample("x + 1", &range, &mut symbols).unwrap();
    assert_eq!(symbols.get(SAMPLE_VARIABLE), Ok(3.0));
}

#[test]
fn first_failing_point_aborts_the_run() {
    let err = plot("y = log(x)", -1.0, 1.0, 0.5).unwrap_err();
    let SampleError::AtPoint { x, error } = err else {
        panic!("expected a failure at a sample point");
    };
    assert_eq!(x, -1.0);
    assert!(matches!(error,
                     Error::Parse(ParseError::Evaluation { error: RuntimeError::InvalidArgument { .. },
                                                           .. })));
}

#[test]
fn syntax_error_is_reported_at_first_point() {
    let err = plot("y = (x + 1", 2.0, 4.0, 1.0).unwrap_err();
    assert_eq!(err,
               SampleError::AtPoint { x:     2.0,
                                      error: Error::Parse(ParseError::ExpectedClosingParen { position: 0 }), });
}

#[test]
fn failure_message_names_the_point() {
    let err = plot("y = 1 / x", -1.0, 1.0, 1.0).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at x = 0: Parser error: Error at position 2: Division by zero.");
}

#[rstest]
#[case(0.0, 1.0, 0.0)]
#[case(0.0, 1.0, -0.5)]
#[case(1.0, 1.0, 0.1)]
#[case(2.0, 1.0, 0.1)]
#[case(f64::NAN, 1.0, 0.1)]
#[case(0.0, f64::INFINITY, 0.1)]
#[case(0.0, 1.0, f64::NAN)]
#[case(0.0, 1.0, 1e-12)]
#[case(-1e308, 1e308, 1.0)]
fn invalid_ranges_are_rejected(#[case] x_min: f64, #[case] x_max: f64, #[case] step: f64) {
    assert!(matches!(SampleRange::new(x_min, x_max, step),
                     Err(SampleError::InvalidRange { .. })));
}

#[rstest]
#[case("x^2")]
#[case("f(x) = x")]
#[case("")]
#[case("y x")]
fn function_must_start_with_y_equals(#[case] function: &str) {
    assert_eq!(plot(function, 0.0, 1.0, 0.5), Err(SampleError::MissingFunctionPrefix));
}
