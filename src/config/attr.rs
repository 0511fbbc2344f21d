use super::Opts;
use crate::event::EventConfig;
use crate::ffi::{bindings as b, Attr};

#[cfg(test)]
mod test;

pub(crate) fn from(event_cfg: EventConfig, opts: &Opts) -> Attr {
    let mut attr = Attr {
        size: b::PERF_ATTR_SIZE_VER0,
        ..Default::default()
    };

    // event config:

    attr.type_ = event_cfg.ty;
    attr.config = event_cfg.config;
    attr.config1 = event_cfg.config1;

    // count config:

    attr.set_exclude_user(opts.exclude.user);
    attr.set_exclude_kernel(opts.exclude.kernel);
    attr.set_exclude_hv(opts.exclude.hv);
    attr.set_exclude_idle(opts.exclude.idle);

    attr.set_disabled(!opts.enable);

    // A plain 8 bytes count is all we read back.
    attr.read_format = 0;

    attr
}
