use std::collections::HashMap;

use build_core::{ApiVersion, ResourceKind, v1alpha1, v1beta1};
use once_cell::sync::Lazy;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{Span, field::Empty, warn};

use crate::{
    error::ConversionError,
    objects::{build, buildrun, buildstrategy},
    options::{ConversionOptions, DecodePolicy},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConversionKey {
    pub from: ApiVersion,
    pub to: ApiVersion,
    pub kind: ResourceKind,
}

impl ConversionKey {
    pub const fn new(from: ApiVersion, to: ApiVersion, kind: ResourceKind) -> Self {
        Self { from, to, kind }
    }
}

pub type ConvertFn =
    fn(&Value, ConversionKey, &ConversionOptions) -> Result<Value, ConversionError>;

static CONVERTERS: Lazy<HashMap<ConversionKey, ConvertFn>> = Lazy::new(|| {
    use ApiVersion::{V1Alpha1, V1Beta1};
    use ResourceKind::{Build, BuildRun, BuildStrategy, ClusterBuildStrategy};

    let mut table: HashMap<ConversionKey, ConvertFn> = HashMap::new();
    table.insert(ConversionKey::new(V1Alpha1, V1Beta1, Build), |object, key, options| {
        convert_resource(object, key, options, v1alpha1::Build::validate, build::into_v1beta1)
    });
    table.insert(ConversionKey::new(V1Beta1, V1Alpha1, Build), |object, key, options| {
        convert_resource(object, key, options, v1beta1::Build::validate, build::into_v1alpha1)
    });
    table.insert(ConversionKey::new(V1Alpha1, V1Beta1, BuildRun), |object, key, options| {
        convert_resource(
            object,
            key,
            options,
            v1alpha1::BuildRun::validate,
            buildrun::into_v1beta1,
        )
    });
    table.insert(ConversionKey::new(V1Beta1, V1Alpha1, BuildRun), |object, key, options| {
        convert_resource(
            object,
            key,
            options,
            v1beta1::BuildRun::validate,
            buildrun::into_v1alpha1,
        )
    });
    table.insert(
        ConversionKey::new(V1Alpha1, V1Beta1, BuildStrategy),
        |object, key, options| {
            convert_resource(object, key, options, |_| Ok(()), buildstrategy::into_v1beta1)
        },
    );
    table.insert(
        ConversionKey::new(V1Beta1, V1Alpha1, BuildStrategy),
        |object, key, options| {
            convert_resource(object, key, options, |_| Ok(()), buildstrategy::into_v1alpha1)
        },
    );
    // The cluster scoped schema is identical in both versions.
    table.insert(
        ConversionKey::new(V1Alpha1, V1Beta1, ClusterBuildStrategy),
        relabel,
    );
    table.insert(
        ConversionKey::new(V1Beta1, V1Alpha1, ClusterBuildStrategy),
        relabel,
    );
    table
});

/// Converts one object to `desired_api_version`.
///
/// Same-version requests return the object untouched. Anything else has to
/// be one of the known kinds moving between v1alpha1 and v1beta1.
#[tracing::instrument(
    name = "conversion.convert",
    skip_all,
    fields(kind = Empty, name = Empty, from = Empty, to = %desired_api_version),
    err
)]
pub fn convert(
    object: &Value,
    desired_api_version: &str,
    options: &ConversionOptions,
) -> Result<Value, ConversionError> {
    let from = string_field(object, "apiVersion")?;
    let kind = string_field(object, "kind")?;

    let span = Span::current();
    span.record("kind", kind);
    span.record("from", from);
    if let Some(name) = object.pointer("/metadata/name").and_then(Value::as_str) {
        span.record("name", name);
    }

    if from == desired_api_version {
        return Ok(object.clone());
    }

    let kind: ResourceKind = kind
        .parse()
        .map_err(|_| ConversionError::UnsupportedKind(kind.to_owned()))?;
    let from: ApiVersion = from
        .parse()
        .map_err(|_| ConversionError::UnexpectedSourceVersion(from.to_owned()))?;
    let to: ApiVersion = desired_api_version
        .parse()
        .map_err(|_| ConversionError::UnexpectedTargetVersion(desired_api_version.to_owned()))?;

    let key = ConversionKey::new(from, to, kind);
    let converter = CONVERTERS
        .get(&key)
        .ok_or_else(|| ConversionError::UnexpectedTargetVersion(desired_api_version.to_owned()))?;

    converter(object, key, options)
}

fn string_field<'a>(object: &'a Value, field: &'static str) -> Result<&'a str, ConversionError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(ConversionError::MissingField(field))
}

fn convert_resource<S, T>(
    object: &Value,
    key: ConversionKey,
    options: &ConversionOptions,
    validate: fn(&S) -> Result<(), build_core::Error>,
    convert: fn(S) -> T,
) -> Result<Value, ConversionError>
where
    S: DeserializeOwned,
    T: Serialize,
{
    let decoded = S::deserialize(with_required_sections(object))
        .map_err(|source| ConversionError::Decode {
            kind: key.kind,
            version: key.from,
            source,
        })
        .and_then(|resource| {
            validate(&resource).map_err(|source| ConversionError::Invalid {
                kind: key.kind,
                version: key.from,
                source,
            })?;
            Ok(resource)
        });

    let source = match decoded {
        Ok(resource) => resource,
        Err(error) if options.decode_policy == DecodePolicy::Lenient => {
            warn!(
                error = %error,
                "⚠️ Object is not a valid {} {}, converting its metadata only",
                key.from,
                key.kind
            );
            S::deserialize(metadata_only(object)).map_err(|source| ConversionError::Decode {
                kind: key.kind,
                version: key.from,
                source,
            })?
        }
        Err(error) => return Err(error),
    };

    let mut converted = serde_json::to_value(convert(source)).map_err(|source| {
        ConversionError::Encode {
            kind: key.kind,
            version: key.to,
            source,
        }
    })?;
    set_type_meta(&mut converted, key);
    Ok(converted)
}

fn relabel(
    object: &Value,
    key: ConversionKey,
    _: &ConversionOptions,
) -> Result<Value, ConversionError> {
    let mut converted = object.clone();
    set_type_meta(&mut converted, key);
    Ok(converted)
}

fn set_type_meta(object: &mut Value, key: ConversionKey) {
    if let Value::Object(fields) = object {
        fields.insert("apiVersion".into(), key.to.as_str().into());
        fields.insert("kind".into(), key.kind.as_str().into());
    }
}

// Objects may omit `metadata` or `spec`; the typed resources require both.
fn with_required_sections(object: &Value) -> Value {
    let mut object = object.clone();
    if let Value::Object(fields) = &mut object {
        for section in ["metadata", "spec"] {
            let missing = fields.get(section).is_none_or(Value::is_null);
            if missing {
                fields.insert(section.into(), Value::Object(Map::new()));
            }
        }
    }
    object
}

fn metadata_only(object: &Value) -> Value {
    let metadata = object
        .get("metadata")
        .filter(|metadata| metadata.is_object())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    serde_json::json!({
        "apiVersion": object.get("apiVersion").cloned().unwrap_or(Value::Null),
        "kind": object.get("kind").cloned().unwrap_or(Value::Null),
        "metadata": metadata,
        "spec": {},
    })
}
