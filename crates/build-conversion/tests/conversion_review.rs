use build_conversion::{ConversionError, ConversionOptions, convert};
use build_core::{Error, v1alpha1, v1beta1};
use serde_json::{Value, json};

const ALPHA: &str = "shipwright.io/v1alpha1";
const BETA: &str = "shipwright.io/v1beta1";

fn object(manifest: &str) -> Value {
    serde_yaml::from_str(manifest).unwrap()
}

fn to_alpha(manifest: &str) -> Value {
    convert(&object(manifest), ALPHA, &ConversionOptions::default()).unwrap()
}

fn to_beta(manifest: &str) -> Value {
    convert(&object(manifest), BETA, &ConversionOptions::default()).unwrap()
}

const BETA_OCI_BUILD: &str = r#"
apiVersion: shipwright.io/v1beta1
kind: Build
metadata:
  name: buildkit-build
  namespace: builds
  labels:
    app: sample
spec:
  source:
    type: OCI
    contextDir: foobar
    ociArtifact:
      image: dockerhub/foobar/hello
      prune: AfterPull
      pullSecret: foobar
  trigger:
    when:
      - name:
        type: GitHub
        github:
          events:
            - Push
          branches:
            - main
            - develop
    triggerSecret: foobar
  strategy:
    name: buildkit
    kind: ClusterBuildStrategy
  paramValues:
    - name: dockerfile
      value: Dockerfile
    - name: platforms
      values:
        - value: linux/amd64
        - value: linux/arm64
        - configMapValue:
            name: platforms
            key: extra
  output:
    image: dockerhub/foobar/hello
    pushSecret: foobar
    annotations:
      foo: bar
    labels:
      foo2: bar2
  timeout: 10m
  env:
    - name: LOG_LEVEL
      value: debug
  retention:
    atBuildDeletion: true
    failedLimit: 10
    succeededLimit: 10
    ttlAfterFailed: 30m
    ttlAfterSucceeded: 30m
  volumes:
    - name: gocache
      emptyDir: {}
"#;

#[test]
fn oci_build_converts_to_a_bundle_container() {
    let converted = to_alpha(BETA_OCI_BUILD);
    assert_eq!(converted["apiVersion"], json!(ALPHA));
    assert_eq!(converted["kind"], json!("Build"));
    assert_eq!(converted["metadata"]["name"], json!("buildkit-build"));
    assert_eq!(converted["metadata"]["labels"]["app"], json!("sample"));

    let build: v1alpha1::Build = serde_json::from_value(converted).unwrap();
    let spec = &build.spec;

    assert_eq!(
        spec.source.bundle_container(),
        Some(&v1alpha1::BundleContainer {
            image: "dockerhub/foobar/hello".to_string(),
            prune: Some(v1alpha1::PruneOption::AfterPull),
        })
    );
    assert_eq!(spec.source.context_dir.as_deref(), Some("foobar"));
    assert_eq!(
        spec.source.credentials,
        Some(v1alpha1::LocalObjectReference::new("foobar"))
    );

    let trigger = spec.trigger.as_ref().unwrap();
    assert_eq!(
        trigger.secret_ref,
        Some(v1alpha1::LocalObjectReference::new("foobar"))
    );
    assert_eq!(trigger.when[0].name, "");
    assert_eq!(
        trigger.when[0].branches(v1alpha1::TriggerType::GitHub),
        ["main".to_string(), "develop".to_string()]
    );

    assert_eq!(spec.strategy_name(), "buildkit");
    assert_eq!(
        spec.strategy.kind,
        Some(v1alpha1::BuildStrategyKind::ClusterBuildStrategy)
    );

    assert_eq!(spec.param_values.len(), 2);
    assert_eq!(
        spec.param_values[0].single_value.value.as_deref(),
        Some("Dockerfile")
    );
    assert_eq!(spec.param_values[1].values.len(), 3);
    assert_eq!(
        spec.param_values[1].values[2]
            .config_map_value
            .as_ref()
            .map(|key_ref| key_ref.key.as_str()),
        Some("extra")
    );

    assert_eq!(spec.output.image, "dockerhub/foobar/hello");
    assert_eq!(spec.output.insecure, Some(false));
    assert_eq!(
        spec.output.credentials,
        Some(v1alpha1::LocalObjectReference::new("foobar"))
    );
    assert_eq!(spec.output.annotations.get("foo").map(String::as_str), Some("bar"));

    assert_eq!(spec.timeout, Some(v1alpha1::Duration::from("10m")));
    assert_eq!(spec.env[0].name, "LOG_LEVEL");

    let retention = spec.retention.as_ref().unwrap();
    assert_eq!(retention.failed_limit, Some(10));
    assert_eq!(retention.succeeded_limit, Some(10));
    assert_eq!(retention.ttl_after_failed, Some(v1alpha1::Duration::from("30m")));
    assert_eq!(retention.ttl_after_succeeded, Some(v1alpha1::Duration::from("30m")));

    assert_eq!(spec.volumes.len(), 1);
    assert_eq!(spec.volumes[0].volume.name, "gocache");
    assert_eq!(spec.volumes[0].description, None);
}

#[test]
fn git_build_converts_to_url_and_revision() {
    let converted = to_alpha(
        r#"
apiVersion: shipwright.io/v1beta1
kind: Build
metadata:
  name: buildkit-build
spec:
  source:
    type: Git
    contextDir: source-build
    git:
      url: https://github.com/shipwright-io/sample-go
      revision: main
      cloneSecret: git-credentials
  strategy:
    name: buildkit
    kind: BuildStrategy
  output:
    image: dockerhub/foobar/hello
"#,
    );

    assert_eq!(
        converted["spec"]["source"],
        json!({
            "url": "https://github.com/shipwright-io/sample-go",
            "revision": "main",
            "contextDir": "source-build",
            "credentials": { "name": "git-credentials" }
        })
    );
    assert_eq!(converted["spec"]["output"]["insecure"], json!(false));
}

#[test]
fn legacy_build_converts_to_a_tagged_source() {
    let converted = to_beta(
        r#"
apiVersion: shipwright.io/v1alpha1
kind: Build
metadata:
  name: buildkit-build
spec:
  source:
    bundleContainer:
      image: dockerhub/foobar/hello
      prune: Never
    credentials:
      name: foobar
    contextDir: foobar
  trigger:
    when:
      - name: push
        type: GitHub
        github:
          events:
            - Push
          branches:
            - main
    secretRef:
      name: foobar
  strategy:
    name: buildkit
    kind: ClusterBuildStrategy
  builder:
    image: quay.io/legacy/builder
  dockerfile: Dockerfile
  paramValues:
    - name: platforms
      values:
        - value: linux/amd64
  output:
    image: dockerhub/foobar/hello
    insecure: true
    credentials:
      name: foobar
"#,
    );

    assert_eq!(
        converted["spec"]["source"],
        json!({
            "type": "OCI",
            "contextDir": "foobar",
            "ociArtifact": {
                "image": "dockerhub/foobar/hello",
                "prune": "Never",
                "pullSecret": "foobar"
            }
        })
    );
    assert_eq!(converted["spec"]["trigger"]["triggerSecret"], json!("foobar"));
    assert_eq!(converted["spec"].get("builder"), None);
    assert_eq!(converted["spec"].get("dockerfile"), None);
    assert_eq!(converted["spec"]["output"]["pushSecret"], json!("foobar"));
    assert_eq!(converted["spec"]["output"].get("insecure"), None);

    let build: v1beta1::Build = serde_json::from_value(converted).unwrap();
    assert_eq!(build.spec.param_values[0].values.len(), 1);
    assert_eq!(
        build.spec.strategy.kind,
        Some(v1beta1::BuildStrategyKind::ClusterBuildStrategy)
    );
}

#[test]
fn legacy_git_url_converts_to_a_git_source() {
    let converted = to_beta(
        r#"
apiVersion: shipwright.io/v1alpha1
kind: Build
metadata:
  name: buildkit-build
spec:
  source:
    url: https://github.com/shipwright-io/sample-go
    credentials:
      name: git-credentials
  strategy:
    name: buildkit
  output:
    image: dockerhub/foobar/hello
"#,
    );

    assert_eq!(
        converted["spec"]["source"],
        json!({
            "type": "Git",
            "git": {
                "url": "https://github.com/shipwright-io/sample-go",
                "cloneSecret": "git-credentials"
            }
        })
    );
}

#[test]
fn buildrun_with_an_embedded_spec() {
    let converted = to_alpha(
        r#"
apiVersion: shipwright.io/v1beta1
kind: BuildRun
metadata:
  name: buildkit-run
spec:
  build:
    spec:
      source:
        type: OCI
        ociArtifact:
          image: dockerhub/foobar/hello
      strategy:
        name: buildkit
        kind: ClusterBuildStrategy
      output:
        image: dockerhub/foobar/hello
"#,
    );

    let run: v1alpha1::BuildRun = serde_json::from_value(converted).unwrap();
    assert_eq!(run.spec.build_ref, None);
    let embedded = run.spec.build_spec.unwrap();
    assert_eq!(
        embedded
            .source
            .bundle_container()
            .map(|bundle| bundle.image.as_str()),
        Some("dockerhub/foobar/hello")
    );
    assert_eq!(embedded.strategy_name(), "buildkit");
}

const BETA_REFERENCED_RUN: &str = r#"
apiVersion: shipwright.io/v1beta1
kind: BuildRun
metadata:
  name: buildkit-run
spec:
  build:
    name: buildkit-build
  serviceAccount: foobar
  timeout: 10s
  paramValues:
    - name: cache
      value: registry
  env:
    - name: foo
      value: bar
  output:
    image: dockerhub/foobar/hello
    pushSecret: foobar
  retention:
    ttlAfterFailed: 10m
  volumes:
    - name: gocache
      emptyDir:
        sizeLimit: 500Mi
"#;

#[test]
fn buildrun_referencing_a_build() {
    let converted = to_alpha(BETA_REFERENCED_RUN);

    assert_eq!(converted["spec"]["buildRef"], json!({ "name": "buildkit-build" }));
    assert_eq!(converted["spec"]["serviceAccount"], json!({ "name": "foobar" }));
    assert_eq!(converted["spec"]["timeout"], json!("10s"));
    assert_eq!(converted["spec"]["env"], json!([{ "name": "foo", "value": "bar" }]));
    assert_eq!(converted["spec"]["retention"], json!({ "ttlAfterFailed": "10m" }));
    assert_eq!(
        converted["spec"]["output"]["credentials"],
        json!({ "name": "foobar" })
    );
    assert_eq!(
        converted["spec"]["volumes"],
        json!([{ "name": "gocache", "emptyDir": { "sizeLimit": "500Mi" } }])
    );
}

#[test]
fn buildrun_round_trips_through_the_legacy_version() {
    let original = object(BETA_REFERENCED_RUN);
    let legacy = convert(&original, ALPHA, &ConversionOptions::default()).unwrap();
    let back = convert(&legacy, BETA, &ConversionOptions::default()).unwrap();

    let original: v1beta1::BuildRun = serde_json::from_value(original).unwrap();
    let back: v1beta1::BuildRun = serde_json::from_value(back).unwrap();
    assert_eq!(back, original);
}

#[test]
fn build_round_trips_apart_from_dropped_fields() {
    let legacy = to_alpha(BETA_OCI_BUILD);
    let back = convert(&legacy, BETA, &ConversionOptions::default()).unwrap();

    let mut expected: v1beta1::Build = serde_json::from_value(object(BETA_OCI_BUILD)).unwrap();
    if let Some(retention) = expected.spec.retention.as_mut() {
        retention.at_build_deletion = None;
    }
    let back: v1beta1::Build = serde_json::from_value(back).unwrap();
    assert_eq!(back, expected);
}

#[test]
fn build_strategy_steps_become_build_steps() {
    let converted = to_alpha(
        r#"
apiVersion: shipwright.io/v1beta1
kind: BuildStrategy
metadata:
  name: buildkit
spec:
  steps:
    - name: build-and-push
      image: moby/buildkit:nightly-rootless
      workingDir: $(params.shp-source-root)
  parameters:
    - name: platforms
      type: array
      defaults: []
  volumes:
    - name: buildkit-cache
      overridable: true
      emptyDir: {}
"#,
    );

    assert_eq!(converted["kind"], json!("BuildStrategy"));
    assert_eq!(
        converted["spec"]["buildSteps"][0]["image"],
        json!("moby/buildkit:nightly-rootless")
    );
    assert_eq!(
        converted["spec"]["volumes"][0]["description"],
        json!("buildkit-cache")
    );
    assert_eq!(converted["spec"]["parameters"][0]["type"], json!("array"));
}

#[test]
fn same_version_is_identity() {
    let original = object(BETA_OCI_BUILD);
    assert_eq!(
        convert(&original, BETA, &ConversionOptions::default()).unwrap(),
        original
    );
}

#[test]
fn unsupported_kind_fails() {
    let secret = object(
        r#"
apiVersion: v1
kind: Secret
metadata:
  name: foobar
"#,
    );

    let error = convert(&secret, BETA, &ConversionOptions::default()).unwrap_err();
    assert!(matches!(error, ConversionError::UnsupportedKind(_)));
    assert_eq!(error.to_string(), "unsupported Kind \"Secret\"");
}

const BETA_BUILD_WITH_PARAMS: &str = r#"
apiVersion: shipwright.io/v1beta1
kind: Build
metadata:
  name: buildkit-build
spec:
  strategy:
    kind: ClusterBuildStrategy
    name: buildkit
  output:
    image: image-registry.openshift-image-registry.svc:5000/example/buildkit
"#;

fn with_param_values(manifest: &str, param_values: Value) -> Value {
    let mut build = object(manifest);
    build["spec"]["paramValues"] = param_values;
    build
}

#[test]
fn param_with_both_value_forms_fails() {
    let build = with_param_values(
        BETA_BUILD_WITH_PARAMS,
        json!([{ "name": "both", "value": "one", "values": [{ "value": "a" }] }]),
    );

    let error = convert(&build, ALPHA, &ConversionOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        ConversionError::Invalid {
            source: Error::AmbiguousParamValue(ref name),
            ..
        } if name == "both"
    ));
    assert_eq!(error.reason(), "Invalid");
}

#[test]
fn param_without_a_name_fails() {
    let build = with_param_values(
        BETA_BUILD_WITH_PARAMS,
        json!([{ "name": "", "value": "unnamed" }]),
    );

    assert!(matches!(
        convert(&build, ALPHA, &ConversionOptions::default()),
        Err(ConversionError::Invalid {
            source: Error::EmptyParamName,
            ..
        })
    ));
}

#[test]
fn invalid_params_in_an_embedded_build_spec_fail() {
    let run = object(
        r#"
apiVersion: shipwright.io/v1alpha1
kind: BuildRun
metadata:
  name: buildkit-run
spec:
  buildSpec:
    source:
      url: https://github.com/shipwright-io/sample-go
    strategy:
      kind: ClusterBuildStrategy
      name: buildkit
    paramValues:
      - name: platforms
        value: linux/amd64
        values:
          - value: linux/arm64
"#,
    );

    assert!(matches!(
        convert(&run, BETA, &ConversionOptions::default()),
        Err(ConversionError::Invalid {
            source: Error::AmbiguousParamValue(_),
            ..
        })
    ));
}

#[test]
fn buildrun_without_a_build_reference_fails() {
    let run = object(
        r#"
apiVersion: shipwright.io/v1beta1
kind: BuildRun
metadata:
  name: buildkit-run
spec:
  serviceAccount: foobar
"#,
    );

    assert!(matches!(
        convert(&run, ALPHA, &ConversionOptions::default()),
        Err(ConversionError::Invalid {
            source: Error::MissingBuildReference,
            ..
        })
    ));

    let converted = convert(&run, ALPHA, &ConversionOptions::lenient()).unwrap();
    assert_eq!(converted["metadata"]["name"], json!("buildkit-run"));
    assert_eq!(converted["spec"].get("buildRef"), None);
}

#[test]
fn invalid_params_are_dropped_with_the_spec_when_lenient() {
    let build = with_param_values(
        BETA_BUILD_WITH_PARAMS,
        json!([{ "name": "", "value": "unnamed" }]),
    );

    let converted = convert(&build, ALPHA, &ConversionOptions::lenient()).unwrap();
    assert_eq!(converted["apiVersion"], json!(ALPHA));
    assert_eq!(converted["spec"].get("paramValues"), None);
}
