use build_core::{
    v1alpha1::{self, LocalObjectReference},
    v1beta1,
};

/// `insecure` has no v1beta1 counterpart and is dropped.
pub fn into_v1beta1(image: v1alpha1::Image) -> v1beta1::Image {
    v1beta1::Image {
        image: image.image,
        push_secret: image
            .credentials
            .map(|credentials| credentials.name)
            .filter(|name| !name.is_empty()),
        annotations: image.annotations,
        labels: image.labels,
    }
}

/// The legacy schema expects `insecure` to be set, so it is pinned to false.
pub fn into_v1alpha1(image: v1beta1::Image) -> v1alpha1::Image {
    v1alpha1::Image {
        image: image.image,
        insecure: Some(false),
        credentials: image
            .push_secret
            .filter(|name| !name.is_empty())
            .map(LocalObjectReference::new),
        annotations: image.annotations,
        labels: image.labels,
    }
}
