use build_core::{v1alpha1, v1beta1};

pub fn build_into_v1beta1(retention: v1alpha1::BuildRetention) -> v1beta1::BuildRetention {
    v1beta1::BuildRetention {
        failed_limit: retention.failed_limit,
        succeeded_limit: retention.succeeded_limit,
        ttl_after_failed: retention.ttl_after_failed,
        ttl_after_succeeded: retention.ttl_after_succeeded,
        at_build_deletion: None,
    }
}

/// `at_build_deletion` only exists in v1beta1 and is dropped.
pub fn build_into_v1alpha1(retention: v1beta1::BuildRetention) -> v1alpha1::BuildRetention {
    v1alpha1::BuildRetention {
        failed_limit: retention.failed_limit,
        succeeded_limit: retention.succeeded_limit,
        ttl_after_failed: retention.ttl_after_failed,
        ttl_after_succeeded: retention.ttl_after_succeeded,
    }
}

pub fn buildrun_into_v1beta1(retention: v1alpha1::BuildRunRetention) -> v1beta1::BuildRunRetention {
    v1beta1::BuildRunRetention {
        ttl_after_failed: retention.ttl_after_failed,
        ttl_after_succeeded: retention.ttl_after_succeeded,
    }
}

pub fn buildrun_into_v1alpha1(retention: v1beta1::BuildRunRetention) -> v1alpha1::BuildRunRetention {
    v1alpha1::BuildRunRetention {
        ttl_after_failed: retention.ttl_after_failed,
        ttl_after_succeeded: retention.ttl_after_succeeded,
    }
}
