use crate::error::PropError;

/// Checks a props struct against its declared constraints.
pub trait ValidateProps {
    fn validate_props(&self, component: &'static str) -> Result<(), PropError>;
}

impl<T: validator::Validate> ValidateProps for T {
    fn validate_props(&self, component: &'static str) -> Result<(), PropError> {
        self.validate()
            .map_err(|errors| PropError::from_validation(component, errors))
    }
}

/// Log every contract violation on `props` and carry on.
///
/// Returns whether the props were valid. Rendering never depends on the
/// result; components degrade on their own.
pub fn report_violations<P: ValidateProps>(component: &'static str, props: &P) -> bool {
    match props.validate_props(component) {
        Ok(()) => true,
        Err(err) => {
            for violation in &err.violations {
                tracing::warn!(
                    component,
                    field = %violation.field,
                    kind = %violation.kind,
                    "{}",
                    violation.message
                );
            }
            false
        }
    }
}
