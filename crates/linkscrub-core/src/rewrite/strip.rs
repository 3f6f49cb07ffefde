//! Tracking-parameter prefix list.

/// Query keys beginning with any of these prefixes are removed.
///
/// From https://github.com/rknightuk/TrackerZapper/blob/main/TrackerZapper/AppDelegate.swift#L160
/// Broad entries like `ref` and `tracking` are intentional; they also catch
/// keys such as `ref_src` and `tracking_id`. Matching is case-sensitive and
/// runs against the raw key text.
pub const STRIP_PREFIXES: &[&str] = &[
    "_bta_c",
    "_bta_tid",
    "_ga",
    "_hsenc",
    "_hsmi",
    "_ke",
    "_openstat",
    "dm_i",
    "ef_id",
    "epik",
    "fbclid",
    "gclid",
    "gclsrc",
    "gdffi",
    "gdfms",
    "gdftrk",
    "hsa_",
    "igshid",
    "matomo_",
    "mc_",
    "mkwid",
    "msclkid",
    "mtm_",
    "ns_",
    "oly_anon_id",
    "oly_enc_id",
    "otc",
    "pcrid",
    "piwik_",
    "pk_",
    "rb_clickid",
    "redirect_log_mongo_id",
    "redirect_mongo_id",
    "ref",
    "s_kwcid",
    "sb_referer_host",
    "soc_src",
    "soc_trk",
    "spm",
    "sr_",
    "srcid",
    "stm_",
    "tracking",
    "trk_",
    "twclid",
    "utm_",
    "vero_",
    "utm-",
];
