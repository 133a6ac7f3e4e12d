use crate::{
    error::{Error, SampleError},
    interpreter::{lexer::lex, parser::parse_statement, symbols::SymbolTable},
};

/// The variable a sampled function is evaluated over.
pub const SAMPLE_VARIABLE: &str = "x";

/// Slack added to the upper bound so that floating-point error in the step
/// does not drop the final point.
pub const END_TOLERANCE: f64 = 1e-9;

/// Upper limit on the number of points a [`SampleRange`] may produce.
pub const MAX_POINTS: u32 = 1_000_000;

/// A validated, inclusive range of sample points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    x_min: f64,
    x_max: f64,
    step:  f64,
}

impl SampleRange {
    /// Creates a range from `x_min` to `x_max`, stepping by `step`.
    ///
    /// # Errors
    /// Returns [`SampleError::InvalidRange`] if any bound is not finite, if
    /// `step` is not positive, if `x_min` is not less than `x_max`, or if the
    /// range would hold more than [`MAX_POINTS`] points.
    ///
    /// # Example
    /// ```
    /// use plotcalc::interpreter::sampling::SampleRange;
    ///
    /// assert!(SampleRange::new(0.0, 2.0, 0.5).is_ok());
    /// assert!(SampleRange::new(0.0, 2.0, 0.0).is_err());
    /// assert!(SampleRange::new(2.0, 0.0, 1.0).is_err());
    /// assert!(SampleRange::new(0.0, 1.0, 1e-12).is_err());
    /// ```
    pub fn new(x_min: f64, x_max: f64, step: f64) -> Result<Self, SampleError> {
        let invalid = |details: &str| SampleError::InvalidRange { details: details.to_string() };

        if !x_min.is_finite() || !x_max.is_finite() || !step.is_finite() {
            return Err(invalid("bounds and step must be finite numbers"));
        }
        if step <= 0.0 {
            return Err(invalid("step size must be positive"));
        }
        if x_min >= x_max {
            return Err(invalid("x-min must be less than x-max"));
        }
        if (x_max - x_min) / step >= f64::from(MAX_POINTS) {
            return Err(invalid(&format!("step size is too small, at most {MAX_POINTS} points can be sampled")));
        }

        Ok(Self { x_min,
                  x_max,
                  step })
    }

    /// The lower bound.
    #[must_use]
    pub const fn x_min(&self) -> f64 {
        self.x_min
    }

    /// The upper bound.
    #[must_use]
    pub const fn x_max(&self) -> f64 {
        self.x_max
    }

    /// The distance between consecutive points.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Iterates over the sample points.
    ///
    /// Point `i` is computed as `x_min + i * step` rather than by repeated
    /// addition, and points are produced while they are at most
    /// `x_max + END_TOLERANCE`.
    ///
    /// # Example
    /// ```
    /// use plotcalc::interpreter::sampling::SampleRange;
    ///
    /// let range = SampleRange::new(0.0, 0.3, 0.1).unwrap();
    /// assert_eq!(range.points().count(), 4);
    /// ```
    pub fn points(&self) -> impl Iterator<Item = f64> {
        let Self { x_min, x_max, step } = *self;
        (0_u32..).map(move |i| x_min + f64::from(i) * step)
                 .take_while(move |x| *x <= x_max + END_TOLERANCE)
    }
}

/// Extracts the right-hand side of a function written as `y = f(x)`.
///
/// Surrounding whitespace is ignored, as is whitespace around the `=`.
///
/// # Errors
/// Returns [`SampleError::MissingFunctionPrefix`] if the text does not start
/// with `y =`.
///
/// # Example
/// ```
/// use plotcalc::interpreter::sampling::function_body;
///
/// assert_eq!(function_body(" y = x^2 ").unwrap(), "x^2");
/// assert!(function_body("x^2").is_err());
/// ```
pub fn function_body(function: &str) -> Result<&str, SampleError> {
    function.trim()
            .strip_prefix('y')
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::trim)
            .ok_or(SampleError::MissingFunctionPrefix)
}

/// Evaluates `expression` at every point of `range`.
///
/// Before each evaluation the current point is written to `symbols` under
/// [`SAMPLE_VARIABLE`]; other bindings in the table are visible to the
/// expression as usual. The expression is lexed once, since lexing does not
/// depend on the table.
///
/// The first failure aborts the whole run and no points are returned. After
/// the run, `symbols` keeps the last point written.
///
/// # Errors
/// Returns [`SampleError::AtPoint`] carrying the failing point and its lexer
/// or parser error. A lexer error is reported at the first point.
///
/// # Example
/// ```
/// use plotcalc::interpreter::{
///     sampling::{SampleRange, sample},
///     symbols::SymbolTable,
/// };
///
/// let mut symbols = SymbolTable::new();
/// let range = SampleRange::new(0.0, 2.0, 1.0).unwrap();
///
/// let points = sample("x^2", &range, &mut symbols).unwrap();
/// assert_eq!(points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
/// ```
#[tracing::instrument(skip(range, symbols))]
pub fn sample(expression: &str,
              range: &SampleRange,
              symbols: &mut SymbolTable)
              -> Result<Vec<(f64, f64)>, SampleError> {
    tracing::debug!(x_min = range.x_min(),
                    x_max = range.x_max(),
                    step = range.step(),
                    "sampling expression");

    let tokens = lex(expression).map_err(|e| SampleError::AtPoint { x:     range.x_min(),
                                                                     error: Error::Lex(e), })?;

    let mut points = Vec::new();
    for x in range.points() {
        symbols.set(SAMPLE_VARIABLE, x);
        match parse_statement(&tokens, symbols) {
            Ok(node) => {
                tracing::trace!(x, y = node.value, "sampled point");
                points.push((x, node.value));
            },
            Err(e) => {
                tracing::warn!(x, error = %e, "sampling aborted");
                return Err(SampleError::AtPoint { x,
                                                  error: Error::Parse(e) });
            },
        }
    }

    tracing::debug!(count = points.len(), "sampling finished");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, RuntimeError};

    #[test]
    fn final_point_survives_step_accumulation() {
        let range = SampleRange::new(0.0, 1.0, 0.1).unwrap();
        let points: Vec<f64> = range.points().collect();
        assert_eq!(points.len(), 11);
        assert!((points[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn accessors_return_validated_bounds() {
        let range = SampleRange::new(-2.5, 4.0, 0.25).unwrap();
        assert_eq!((range.x_min(), range.x_max(), range.step()), (-2.5, 4.0, 0.25));
    }

    #[test]
    fn point_count_is_bounded() {
        assert!(matches!(SampleRange::new(0.0, 1.0, 1e-12),
                         Err(SampleError::InvalidRange { .. })));
        assert!(matches!(SampleRange::new(-1e308, 1e308, 1.0),
                         Err(SampleError::InvalidRange { .. })));

        let widest = SampleRange::new(0.0, f64::from(MAX_POINTS - 1), 1.0).unwrap();
        assert_eq!(widest.points().count(), MAX_POINTS as usize);
    }

    #[test]
    fn points_stop_before_overshooting() {
        let range = SampleRange::new(0.0, 1.0, 0.3).unwrap();
        let points: Vec<f64> = range.points().collect();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|x| *x <= 1.0));
    }

    #[test]
    fn failure_at_one_point_discards_everything() {
        let mut symbols = SymbolTable::new();
        let range = SampleRange::new(-1.0, 1.0, 1.0).unwrap();

        let err = sample("1/x", &range, &mut symbols).unwrap_err();
        assert_eq!(err,
                   SampleError::AtPoint { x:     0.0,
                                          error: Error::Parse(ParseError::Evaluation { error:    RuntimeError::DivisionByZero,
                                                                                       position: 1, }), });
        assert_eq!(symbols.get(SAMPLE_VARIABLE), Ok(0.0));
    }

    #[test]
    fn lexer_error_is_reported_at_first_point() {
        let mut symbols = SymbolTable::new();
        let range = SampleRange::new(3.0, 4.0, 1.0).unwrap();

        let err = sample("x $ 2", &range, &mut symbols).unwrap_err();
        assert!(matches!(err, SampleError::AtPoint { x, error: Error::Lex(_) } if x == 3.0));
    }

    #[test]
    fn other_bindings_are_visible() {
        let mut symbols = SymbolTable::new();
        symbols.set("a", 3.0);
        let range = SampleRange::new(1.0, 2.0, 1.0).unwrap();

        let points = sample("a x", &range, &mut symbols).unwrap();
        assert_eq!(points, vec![(1.0, 3.0), (2.0, 6.0)]);
    }

    #[test]
    fn function_prefix_is_required() {
        assert_eq!(function_body("y=sin(x)"), Ok("sin(x)"));
        assert_eq!(function_body("y =2x"), Ok("2x"));
        assert_eq!(function_body("f(x) = x"), Err(SampleError::MissingFunctionPrefix));
        assert_eq!(function_body("yx = 2"), Err(SampleError::MissingFunctionPrefix));
    }
}
