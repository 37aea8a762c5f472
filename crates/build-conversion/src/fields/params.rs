use build_core::{v1alpha1, v1beta1};

/// Converts a param list entry by entry, keeping order.
pub fn list_into_v1beta1(params: Vec<v1alpha1::ParamValue>) -> Vec<v1beta1::ParamValue> {
    params.into_iter().map(into_v1beta1).collect()
}

pub fn list_into_v1alpha1(params: Vec<v1beta1::ParamValue>) -> Vec<v1alpha1::ParamValue> {
    params.into_iter().map(into_v1alpha1).collect()
}

pub fn into_v1beta1(param: v1alpha1::ParamValue) -> v1beta1::ParamValue {
    v1beta1::ParamValue {
        name: param.name,
        single_value: single_into_v1beta1(param.single_value),
        values: param.values.into_iter().map(single_into_v1beta1).collect(),
    }
}

pub fn into_v1alpha1(param: v1beta1::ParamValue) -> v1alpha1::ParamValue {
    v1alpha1::ParamValue {
        name: param.name,
        single_value: single_into_v1alpha1(param.single_value),
        values: param.values.into_iter().map(single_into_v1alpha1).collect(),
    }
}

fn single_into_v1beta1(value: v1alpha1::SingleValue) -> v1beta1::SingleValue {
    v1beta1::SingleValue {
        value: value.value,
        config_map_value: value.config_map_value.map(key_ref_into_v1beta1),
        secret_value: value.secret_value.map(key_ref_into_v1beta1),
    }
}

fn single_into_v1alpha1(value: v1beta1::SingleValue) -> v1alpha1::SingleValue {
    v1alpha1::SingleValue {
        value: value.value,
        config_map_value: value.config_map_value.map(key_ref_into_v1alpha1),
        secret_value: value.secret_value.map(key_ref_into_v1alpha1),
    }
}

fn key_ref_into_v1beta1(key_ref: v1alpha1::ObjectKeyRef) -> v1beta1::ObjectKeyRef {
    v1beta1::ObjectKeyRef {
        name: key_ref.name,
        key: key_ref.key,
        format: key_ref.format,
    }
}

fn key_ref_into_v1alpha1(key_ref: v1beta1::ObjectKeyRef) -> v1alpha1::ObjectKeyRef {
    v1alpha1::ObjectKeyRef {
        name: key_ref.name,
        key: key_ref.key,
        format: key_ref.format,
    }
}
