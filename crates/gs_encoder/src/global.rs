//! A process-wide encoder for application wiring.
//!
//! Every function here shares one [`Encoder`], created on first use and never
//! reset, and panics where the encoder would return an error. Library code
//! should own an [`Encoder`] instead.
//!
//! Object handles returned here belong to the shared encoder, read them
//! through [`with_encoder`].
//!
//! ```
//! use gs_encoder::global;
//! use gs_reflect::derive::Record;
//!
//! #[derive(Record)]
//! struct Query {
//!     #[graphql("version")]
//!     version: String,
//! }
//!
//! let query = global::struct_of::<Query>(&[]);
//! let name = global::with_encoder(|encoder| encoder.object(query).unwrap().name().to_owned());
//! assert_eq!(name, "Query");
//! ```

use std::sync::{LazyLock, Mutex, PoisonError};

use gs_reflect::registry::GetTypeMeta;
use gs_schema::{ArgumentMap, Field, ObjectId, SchemaType};

use crate::{Encoder, SchemaOption};

static ENCODER: LazyLock<Mutex<Encoder>> = LazyLock::new(|| Mutex::new(Encoder::new()));

/// Runs `func` with exclusive access to the shared encoder.
///
/// Calling any function of this module from `func` deadlocks.
pub fn with_encoder<R>(func: impl FnOnce(&mut Encoder) -> R) -> R {
    let mut encoder = ENCODER.lock().unwrap_or_else(PoisonError::into_inner);
    func(&mut encoder)
}

/// See [`Encoder::struct_of`].
///
/// # Panics
///
/// On any [`EncodeError`](crate::EncodeError).
#[track_caller]
pub fn struct_of<T: GetTypeMeta + ?Sized>(options: &[SchemaOption]) -> ObjectId {
    with_encoder(|encoder| encoder.struct_of::<T>(options))
        .unwrap_or_else(|err| err.handle_error())
}

/// See [`Encoder::args_of`].
///
/// # Panics
///
/// On any [`EncodeError`](crate::EncodeError).
#[track_caller]
pub fn args_of<T: GetTypeMeta + ?Sized>() -> ArgumentMap {
    with_encoder(|encoder| encoder.args_of::<T>()).unwrap_or_else(|err| err.handle_error())
}

/// See [`Encoder::array_of`].
///
/// # Panics
///
/// On any [`EncodeError`](crate::EncodeError).
#[track_caller]
pub fn array_of<T: GetTypeMeta + ?Sized>(options: &[SchemaOption]) -> SchemaType {
    with_encoder(|encoder| encoder.array_of::<T>(options))
        .unwrap_or_else(|err| err.handle_error())
}

/// See [`Encoder::field_of`].
///
/// # Panics
///
/// On any [`EncodeError`](crate::EncodeError).
#[track_caller]
pub fn field_of<T: GetTypeMeta + ?Sized>(options: &[SchemaOption]) -> Field {
    with_encoder(|encoder| encoder.field_of::<T>(options))
        .unwrap_or_else(|err| err.handle_error())
}

#[cfg(test)]
#[allow(dead_code)]
mod tests {
    use gs_reflect::derive::Record;
    use gs_schema::Scalar;

    use super::{args_of, struct_of, with_encoder};

    #[derive(Record)]
    struct Session {
        #[graphql("!token")]
        token: String,
    }

    #[derive(Record)]
    struct Broken {
        #[graphql("payload")]
        payload: Box<dyn std::any::Any>,
    }

    #[test]
    fn shared_encoder_is_idempotent() {
        let first = struct_of::<Session>(&[]);
        let second = struct_of::<Session>(&[]);
        assert_eq!(first, second);

        with_encoder(|encoder| {
            let object = encoder.object(first).unwrap();
            assert_eq!(object.fields().len(), 1);
        });
    }

    #[test]
    #[should_panic(expected = "not recognized")]
    fn errors_become_panics() {
        args_of::<Broken>();
    }

    #[test]
    fn panics_do_not_poison() {
        let _ = std::panic::catch_unwind(|| struct_of::<Broken>(&[]));
        assert!(std::panic::catch_unwind(|| struct_of::<Broken>(&[])).is_err());
        let args = args_of::<Session>();
        assert_eq!(
            args.get("token").unwrap().ty,
            gs_schema::SchemaType::non_null(Scalar::String.into())
        );
    }
}
