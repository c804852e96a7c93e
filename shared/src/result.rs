//! Two-variant outcome type for API calls
//!
//! [`ApiResult`] is the value every API-client operation resolves to: either
//! a success payload or an [`ApiFailure`]. Callers consume it with
//! [`ApiResult::fold`] or convert it into a `std` [`Result`] and use `?`.

use crate::error::ApiFailure;

/// Outcome of an API call
///
/// Exactly one variant is populated. `T` is unconstrained: a deserialized
/// payload, a list, or `()` for calls whose body is irrelevant.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// The call succeeded with a payload
    Success(T),
    /// The call failed; the failure says why
    Failure(ApiFailure),
}

impl<T> ApiResult<T> {
    /// Whether this is the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is the failure variant
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume self and take the success value, if any
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure, if any
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Consume self and take the failure, if any
    pub fn into_failure(self) -> Option<ApiFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Consume the outcome with one handler per variant
    ///
    /// Exactly one of the handlers runs, synchronously, and its return value
    /// becomes the result. This is the blessed way for callers to branch.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(ApiFailure) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Transform the success value; a failure passes through untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success(value) => ApiResult::Success(f(value)),
            Self::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    /// Chain a call that can itself fail; a failure passes through untouched
    pub fn and_then<U>(self, f: impl FnOnce(T) -> ApiResult<U>) -> ApiResult<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    /// Convert into a `std` [`Result`] for use with `?`
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Result<T, ApiFailure>> for ApiResult<T> {
    fn from(result: Result<T, ApiFailure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn failed() -> ApiResult<i32> {
        ApiResult::Failure(ApiFailure::not_found("Order not found"))
    }

    #[test]
    fn test_predicates() {
        assert!(ApiResult::Success(1).is_success());
        assert!(!ApiResult::Success(1).is_failure());
        assert!(failed().is_failure());
        assert!(!failed().is_success());
    }

    #[test]
    fn test_accessors_are_total() {
        let ok: ApiResult<i32> = ApiResult::Success(7);
        assert_eq!(ok.value(), Some(&7));
        assert_eq!(ok.failure(), None);
        assert_eq!(ok.into_value(), Some(7));

        let err = failed();
        assert_eq!(err.value(), None);
        assert_eq!(err.failure().map(|f| f.kind()), Some(FailureKind::NotFound));
        assert_eq!(err.into_value(), None);
        assert!(failed().into_failure().is_some());
    }

    #[test]
    fn test_fold_calls_exactly_one_handler() {
        let outcome = ApiResult::Success(2).fold(|v| v * 10, |_| -1);
        assert_eq!(outcome, 20);

        let outcome = failed().fold(|v| v * 10, |f| f.message().len() as i32);
        assert_eq!(outcome, "Order not found".len() as i32);
    }

    #[test]
    fn test_map_identity_is_identity() {
        let ok: ApiResult<i32> = ApiResult::Success(3);
        assert_eq!(ok.clone().map(|v| v), ok);
        assert_eq!(failed().map(|v| v), failed());
    }

    #[test]
    fn test_map_skips_failure() {
        let mapped = failed().map(|v| v + 1);
        assert_eq!(mapped, failed());
    }

    #[test]
    fn test_and_then_success_is_identity() {
        let ok: ApiResult<i32> = ApiResult::Success(3);
        assert_eq!(ok.clone().and_then(ApiResult::Success), ok);
        assert_eq!(failed().and_then(ApiResult::Success), failed());
    }

    #[test]
    fn test_and_then_chains() {
        let chained = ApiResult::Success(2).and_then(|v| {
            if v > 0 {
                ApiResult::Success(v * 2)
            } else {
                ApiResult::Failure(ApiFailure::validation("must be positive"))
            }
        });
        assert_eq!(chained, ApiResult::Success(4));

        let chained = ApiResult::Success(-1)
            .and_then(|v: i32| ApiResult::<i32>::Failure(ApiFailure::validation(format!("{v}"))));
        assert!(chained.is_failure());
    }

    #[test]
    fn test_std_result_round_trip() {
        let ok: ApiResult<i32> = ApiResult::Success(5);
        let std = ok.clone().into_result();
        assert_eq!(std, Ok(5));
        assert_eq!(ApiResult::from(std), ok);

        assert!(failed().into_result().is_err());
    }
}
