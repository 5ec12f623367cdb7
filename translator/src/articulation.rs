//! Articulated/attached part array translation.
//!
//! The application carries sub-part state as a group of named sub-groups;
//! the federation carries it as a packed array of fixed records. Parent
//! linkage differs too: groups name their parent part, records store the
//! array index of the parent, so encoding relinks names to indices and
//! decoding reverses the lookup.

use tracing::{debug, error};

use records::{ArticulatedParts, ArticulatedRecord, AttachedParts, EntityType, PartPayload};
use schema::{AttributeType, ParameterDefinition};

use crate::error::{TranslateError, TranslateResult};
use crate::numeric::integer_value;
use crate::value::{GroupValue, ParameterValue};

const ARTICULATED_GROUP_PREFIX: &str = "ArticulatedPartMessageParam";
const ATTACHED_GROUP_PREFIX: &str = "AttachedPartMessageParam";

/// Parent name used when a record's parent index resolves to nothing.
const ROOT_PART_NAME: &str = "dof_chassis";

/// Metric parameter names in type-metric id order (ids 1..=16).
const METRIC_NAMES: [&str; 16] = [
    "Position",
    "PositionRate",
    "Extension",
    "ExtensionRate",
    "X",
    "XRate",
    "Y",
    "YRate",
    "Z",
    "ZRate",
    "Azimuth",
    "AzimuthRate",
    "Elevation",
    "ElevationRate",
    "Rotation",
    "RotationRate",
];

const METRIC_AZIMUTH: u32 = 11;
const METRIC_AZIMUTH_RATE: u32 = 12;

fn metric_name(id: u32) -> Option<&'static str> {
    if (1..=16).contains(&id) {
        Some(METRIC_NAMES[(id - 1) as usize])
    } else {
        None
    }
}

fn metric_id(name: &str) -> Option<u32> {
    METRIC_NAMES
        .iter()
        .position(|metric| *metric == name)
        .map(|index| index as u32 + 1)
}

/// Azimuth values carry an inverted sign on the application side.
fn metric_value_to_local(type_metric: u32, value: f32) -> f32 {
    if type_metric == METRIC_AZIMUTH || type_metric == METRIC_AZIMUTH_RATE {
        -value
    } else {
        value
    }
}

/// Encodes an articulation group into a packed record array.
///
/// Encoding stops with an error log if the destination is exhausted before
/// every record is written; the bytes already written still count.
pub(crate) fn encode_articulations(
    definition: &ParameterDefinition,
    parameter: &ParameterValue,
    out: &mut [u8],
) -> TranslateResult<usize> {
    let Some(group) = parameter.as_group() else {
        return Err(TranslateError::WrongParameterKind {
            attribute_type: AttributeType::ArticulatedPart,
            found: parameter.data_type().name(),
        });
    };

    let mut resolved: Vec<(ArticulatedRecord, Option<u32>)> = Vec::new();
    for (name, child) in group.entries() {
        let Some(record) = build_record(definition, name, child) else {
            break;
        };
        resolved.push((record, parent_class(definition, child)));
    }

    // Second pass: replace textual parent references with array indices.
    // The first record whose resolved class matches wins; an unmatched
    // parent falls back to index 0, the implicit root.
    for i in 0..resolved.len() {
        if let Some(class) = resolved[i].1 {
            let index = resolved.iter().position(|(candidate, _)| {
                matches!(candidate.payload, PartPayload::Articulated(parts) if parts.class == class)
            });
            resolved[i].0.part_attached_to = index.unwrap_or(0) as u16;
        }
    }

    let total = resolved.len();
    let mut written = 0usize;
    for (count, (record, _)) in resolved.iter().enumerate() {
        match record.encode(&mut out[written..]) {
            Ok(n) => written += n,
            Err(_) => {
                error!(
                    written = count,
                    total,
                    "buffer exhausted before all articulation records were written"
                );
                break;
            }
        }
    }
    Ok(written)
}

fn build_record(
    definition: &ParameterDefinition,
    name: &str,
    child: &ParameterValue,
) -> Option<ArticulatedRecord> {
    let Some(group) = child.as_group() else {
        error!(
            group = name,
            "outgoing articulation entry is not a group of sub parameters"
        );
        return None;
    };

    let change = group
        .get("Change")
        .map_or(0, |value| integer_value(value, definition)) as u8;

    let payload = if name.starts_with(ATTACHED_GROUP_PREFIX) {
        let station = group
            .get("Station")
            .map_or(0, |value| integer_value(value, definition));
        let store_type = group
            .get("DISInfo")
            .and_then(ParameterValue::to_text)
            .and_then(|text| definition.federation_value_for(&text))
            .map(|mapped| EntityType::from_text(&mapped))
            .unwrap_or_default();
        PartPayload::Attached(AttachedParts::new(station, store_type))
    } else if name.starts_with(ARTICULATED_GROUP_PREFIX) {
        let mut parts = ArticulatedParts::default();
        for (child_name, value) in group.entries() {
            match child_name {
                "OurName" => {
                    if let Some(text) = value.to_text() {
                        parts.class = definition
                            .federation_value_for(&text)
                            .and_then(|mapped| mapped.parse().ok())
                            .unwrap_or(0);
                    }
                }
                "OurParent" | "Change" => {}
                metric => {
                    if let ParameterValue::Float(v) = value {
                        if let Some(id) = metric_id(metric) {
                            parts.type_metric = id;
                            parts.value = *v;
                        }
                    }
                }
            }
        }
        PartPayload::Articulated(parts)
    } else {
        error!(
            group = name,
            "articulation group name does not identify a part kind"
        );
        return None;
    };

    Some(ArticulatedRecord::new(change, 0, payload))
}

fn parent_class(definition: &ParameterDefinition, child: &ParameterValue) -> Option<u32> {
    let text = child.as_group()?.get("OurParent")?.to_text()?;
    if text.is_empty() {
        return None;
    }
    definition.federation_value_for(&text)?.parse().ok()
}

/// Decodes a packed record array back into an articulation group.
///
/// The buffer length must divide evenly by the record length; a remainder
/// is ignored with a log. Per-record sanity violations are logged at debug
/// level and do not abort decoding.
pub(crate) fn decode_articulations(
    definition: &ParameterDefinition,
    bytes: &[u8],
) -> TranslateResult<ParameterValue> {
    if bytes.len() % ArticulatedRecord::ENCODED_LENGTH != 0 {
        debug!(
            size = bytes.len(),
            record_length = ArticulatedRecord::ENCODED_LENGTH,
            "articulation buffer length is not a record multiple; remainder ignored"
        );
    }
    let count = bytes.len() / ArticulatedRecord::ENCODED_LENGTH;
    if count == 0 {
        debug!("articulation buffer holds no complete records");
    }

    let mut decoded = Vec::with_capacity(count);
    for i in 0..count {
        let start = i * ArticulatedRecord::ENCODED_LENGTH;
        let record =
            ArticulatedRecord::decode(&bytes[start..start + ArticulatedRecord::ENCODED_LENGTH])?;
        validate_record(&record);
        decoded.push(record);
    }

    let mut groups: Vec<(String, GroupValue)> = Vec::with_capacity(count);
    let mut articulated_count = 0u32;
    let mut attached_count = 0u32;
    for record in &decoded {
        let mut group = GroupValue::new();
        let name = match record.payload {
            PartPayload::Articulated(parts) => {
                let class_name = definition.application_value_for(&parts.class.to_string());
                group.add("OurName", ParameterValue::String(class_name));
                group.add(
                    "Change",
                    ParameterValue::UnsignedInt(u32::from(record.change)),
                );
                if let Some(metric) = metric_name(parts.type_metric) {
                    group.add(
                        metric,
                        ParameterValue::Float(metric_value_to_local(
                            parts.type_metric,
                            parts.value,
                        )),
                    );
                } else {
                    debug!(
                        type_metric = parts.type_metric,
                        "articulated part carries an unknown metric; value dropped"
                    );
                }
                let name = format!("{ARTICULATED_GROUP_PREFIX}{articulated_count}");
                articulated_count += 1;
                name
            }
            PartPayload::Attached(parts) => {
                group.add("Station", ParameterValue::UnsignedInt(parts.station));
                group.add(
                    "DISInfo",
                    ParameterValue::Enumeration(
                        definition.application_value_for(&parts.store_type.to_string()),
                    ),
                );
                group.add(
                    "Change",
                    ParameterValue::UnsignedInt(u32::from(record.change)),
                );
                let name = format!("{ATTACHED_GROUP_PREFIX}{attached_count}");
                attached_count += 1;
                name
            }
        };
        groups.push((name, group));
    }

    // Reverse the parent linkage: each record's parent index becomes the
    // name of that record's part, or the implicit root when out of range.
    let parent_names: Vec<String> = decoded
        .iter()
        .map(|record| {
            groups
                .get(usize::from(record.part_attached_to))
                .and_then(|(_, group)| group.get("OurName"))
                .and_then(ParameterValue::to_text)
                .unwrap_or_else(|| ROOT_PART_NAME.to_owned())
        })
        .collect();
    for ((_, group), parent) in groups.iter_mut().zip(parent_names) {
        group.add("OurParent", ParameterValue::String(parent));
    }

    let mut root = GroupValue::new();
    for (name, group) in groups {
        root.add(name, ParameterValue::Group(group));
    }
    Ok(ParameterValue::Group(root))
}

fn validate_record(record: &ArticulatedRecord) {
    match record.payload {
        PartPayload::Attached(parts) => {
            if parts.station == 0 {
                debug!("attached part record carries station id 0");
            }
        }
        PartPayload::Articulated(parts) => {
            if parts.class == 0 {
                debug!("articulated part record carries class 0");
            }
            if parts.type_metric == 0 || parts.type_metric > 16 {
                debug!(
                    type_metric = parts.type_metric,
                    "articulated part record carries an out-of-range metric"
                );
            }
        }
    }
}
