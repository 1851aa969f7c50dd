//! Canonical browser names and their known aliases.
//!
//! Test farms, caniuse data and humans all name the same browsers
//! differently (`ie`, `msie`, `internet explorer`). This crate maps every
//! known name of a browser to the full set of names it is known under,
//! using a compile-time perfect hash map for zero runtime allocation.
//! Keys are lower-case.

use phf::phf_map;

const ANDROID: &[&str] = &["android", "android browser", "aosp"];
const AND_CHR: &[&str] = &["and_chr", "chrome for android", "android chrome", "chrome android"];
const AND_FF: &[&str] = &["and_ff", "firefox for android", "android firefox", "firefox android"];
const AND_UC: &[&str] = &["and_uc", "uc browser for android", "uc for android"];
const CHROME: &[&str] = &["chrome", "google chrome", "googlechrome"];
const CHROMIUM: &[&str] = &["chromium"];
const EDGE: &[&str] = &["edge", "microsoft edge", "msedge"];
const FIREFOX: &[&str] = &["firefox", "ff", "mozilla firefox"];
const IE: &[&str] = &["ie", "internet explorer", "msie"];
const IE_MOB: &[&str] = &["ie_mob", "internet explorer mobile", "ie mobile"];
const IOS_SAF: &[&str] = &["ios_saf", "ios safari", "mobile safari", "safari mobile"];
const OP_MINI: &[&str] = &["op_mini", "opera mini"];
const OP_MOB: &[&str] = &["op_mob", "opera mobile"];
const OPERA: &[&str] = &["opera"];
const SAFARI: &[&str] = &["safari", "apple safari", "desktop safari", "safari desktop"];
const SAMSUNG: &[&str] = &["samsung", "samsung browser", "samsung internet"];

static NAMES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "android" => ANDROID,
    "android browser" => ANDROID,
    "aosp" => ANDROID,
    "and_chr" => AND_CHR,
    "chrome for android" => AND_CHR,
    "android chrome" => AND_CHR,
    "chrome android" => AND_CHR,
    "and_ff" => AND_FF,
    "firefox for android" => AND_FF,
    "android firefox" => AND_FF,
    "firefox android" => AND_FF,
    "and_uc" => AND_UC,
    "uc browser for android" => AND_UC,
    "uc for android" => AND_UC,
    "chrome" => CHROME,
    "google chrome" => CHROME,
    "googlechrome" => CHROME,
    "chromium" => CHROMIUM,
    "edge" => EDGE,
    "microsoft edge" => EDGE,
    "msedge" => EDGE,
    "firefox" => FIREFOX,
    "ff" => FIREFOX,
    "mozilla firefox" => FIREFOX,
    "ie" => IE,
    "internet explorer" => IE,
    "msie" => IE,
    "ie_mob" => IE_MOB,
    "internet explorer mobile" => IE_MOB,
    "ie mobile" => IE_MOB,
    "ios_saf" => IOS_SAF,
    "ios safari" => IOS_SAF,
    "mobile safari" => IOS_SAF,
    "safari mobile" => IOS_SAF,
    "op_mini" => OP_MINI,
    "opera mini" => OP_MINI,
    "op_mob" => OP_MOB,
    "opera mobile" => OP_MOB,
    "opera" => OPERA,
    "safari" => SAFARI,
    "apple safari" => SAFARI,
    "desktop safari" => SAFARI,
    "safari desktop" => SAFARI,
    "samsung" => SAMSUNG,
    "samsung browser" => SAMSUNG,
    "samsung internet" => SAMSUNG,
};

/// All names `name` is known under, including `name` itself. Unknown
/// names yield an empty slice. Lookup is exact on lower-case names.
pub fn names(name: &str) -> &'static [&'static str] {
    NAMES.get(name).copied().unwrap_or(&[])
}
