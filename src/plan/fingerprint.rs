use crate::plan::descriptor::{AnimationDescriptor, RevealOp};
use crate::plan::pipeline::AnimationPlan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// 128-bit content fingerprint of an animation plan.
///
/// Two plans with equal fingerprints are byte-identical for scheduling
/// purposes; callers can use this for cheap determinism checks and render
/// caching without serializing the whole plan.
pub struct PlanFingerprint {
    /// High hash half.
    pub hi: u64,
    /// Low hash half.
    pub lo: u64,
}

/// Fingerprint a plan with a pair of independently seeded FNV-1a 64 hashes.
pub fn fingerprint_plan(plan: &AnimationPlan) -> PlanFingerprint {
    let mut a = Fnv1a64::new(0xcbf29ce484222325);
    let mut b = Fnv1a64::new(0x9ae16a3b2f90404f);

    write_u64_pair(&mut a, &mut b, plan.total_duration_ms);
    write_u64_pair(&mut a, &mut b, plan.descriptors.len() as u64);
    for d in &plan.descriptors {
        write_descriptor_pair(&mut a, &mut b, d);
    }

    PlanFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_descriptor_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, d: &AnimationDescriptor) {
    write_str_pair(a, b, &d.element_id);
    match &d.group_id {
        Some(g) => {
            write_u8_pair(a, b, 1);
            write_str_pair(a, b, g);
        }
        None => write_u8_pair(a, b, 0),
    }
    write_u64_pair(a, b, d.span.start.0);
    write_u64_pair(a, b, d.span.duration_ms);
    write_str_pair(a, b, d.kind());

    match &d.op {
        RevealOp::PolygonStroke { svg_d }
        | RevealOp::PathStroke { svg_d }
        | RevealOp::PointerMotion { svg_d } => write_str_pair(a, b, svg_d),
        RevealOp::PolygonFill { svg_d, color } | RevealOp::PathFill { svg_d, color } => {
            write_str_pair(a, b, svg_d);
            write_str_pair(a, b, color);
        }
        RevealOp::TextTyping { text, char_count } => {
            write_str_pair(a, b, text);
            write_u64_pair(a, b, *char_count as u64);
        }
        RevealOp::FreehandProgression { points, progress } => {
            write_u64_pair(a, b, points.len() as u64);
            for p in points {
                write_u64_pair(a, b, p.x.to_bits());
                write_u64_pair(a, b, p.y.to_bits());
            }
            for f in progress {
                write_u64_pair(a, b, f.to_bits());
            }
        }
        RevealOp::GenericOpacity => {}
    }
}

// Seeded FNV-1a 64.
#[derive(Clone, Copy, Debug)]
struct Fnv1a64(u64);

impl Fnv1a64 {
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &byte in bytes {
            h ^= u64::from(byte);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    fn finish(self) -> u64 {
        self.0
    }
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/plan/fingerprint.rs"]
mod tests;
