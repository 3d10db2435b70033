// Copyright 2025 IREE Benchmark Dashboard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Human-readable series descriptions.

use iree_dashboard_benchmarks::{BenchmarkInfo, ModelSource};

/// Footer appended to every series description.
pub const COMMON_DESCRIPTION: &str = "
<br>
For the graph, the x axis is the Git commit index, and the y axis is the
measured latency in milliseconds.
<br>
See <a href=\"https://github.com/google/iree/tree/main/benchmarks/dashboard.md\">
https://github.com/google/iree/tree/main/benchmarks/dashboard.md
</a> for benchmark philosophy, specification, and definitions.
";

// Not exhaustive; models listed here get a link to their source.
const TF_MODEL_SOURCE_URL: &[(&str, &str)] = &[
    (
        "MobileBertSquad",
        "https://github.com/google-research/google-research/tree/master/mobilebert",
    ),
    (
        "MobileNetV2",
        "https://www.tensorflow.org/api_docs/python/tf/keras/applications/MobileNetV2",
    ),
    (
        "MobileNetV3Small",
        "https://www.tensorflow.org/api_docs/python/tf/keras/applications/MobileNetV3Small",
    ),
];

const TFLITE_MODEL_SOURCE_URL: &[(&str, &str)] = &[
    (
        "DeepLabV3",
        "https://tfhub.dev/tensorflow/lite-model/deeplabv3/1/default/1",
    ),
    (
        "MobileSSD",
        "https://www.tensorflow.org/lite/performance/gpu#demo_app_tutorials",
    ),
    (
        "PoseNet",
        "https://tfhub.dev/tensorflow/lite-model/posenet/mobilenet/float/075/1/default/1",
    ),
];

/// Source URL of a known model.
pub fn model_source_url(source: ModelSource, model_name: &str) -> Option<&'static str> {
    let table = match source {
        ModelSource::TensorFlow => TF_MODEL_SOURCE_URL,
        ModelSource::TFLite => TFLITE_MODEL_SOURCE_URL,
    };
    table
        .iter()
        .find(|(name, _)| *name == model_name)
        .map(|(_, url)| *url)
}

/// Model description with a source link, for models in the lookup tables.
pub fn model_description(info: &BenchmarkInfo) -> Option<String> {
    model_source_url(info.model_source, &info.model_name).map(|url| {
        format!(
            "{} from <a href=\"{url}\">{url}</a>.",
            info.model_name,
            url = url
        )
    })
}

/// Full series description: the model description, if any, plus the footer.
pub fn series_description(info: &BenchmarkInfo) -> String {
    let mut description = model_description(info).unwrap_or_default();
    description.push_str(COMMON_DESCRIPTION);
    description
}
