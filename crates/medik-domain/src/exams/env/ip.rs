//! IP address exams. `env.ip` accepts anything either address family accepts.

use crate::environment::Environment;
use crate::error::ExamParseError;
use crate::exams::evaluate::{AnyOf, ValueCheck, examinate_vars};
use crate::exams::{Common, ExamSpec};
use medik_types::ids::{EXAM_ENV_IP, EXAM_ENV_IPV4, EXAM_ENV_IPV6};
use medik_types::{ExamDescriptor, ExamReport};
use std::net::{Ipv4Addr, Ipv6Addr};

fn is_ipv4(value: &str) -> Result<(), String> {
    value
        .parse::<Ipv4Addr>()
        .map(drop)
        .map_err(|_| "value should be a valid IPv4 address".to_string())
}

fn is_ipv6(value: &str) -> Result<(), String> {
    value
        .parse::<Ipv6Addr>()
        .map(drop)
        .map_err(|_| "value should be a valid IPv6 address".to_string())
}

/// Dotted-quad IPv4 address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ipv4 {
    common: Common,
}

impl ExamSpec for Ipv4 {
    const TAG: &'static str = EXAM_ENV_IPV4;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &is_ipv4,
        )
    }
}

/// IPv6 address in any standard textual form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ipv6 {
    common: Common,
}

impl ExamSpec for Ipv6 {
    const TAG: &'static str = EXAM_ENV_IPV6;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &is_ipv6,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ip {
    common: Common,
}

impl ExamSpec for Ip {
    const TAG: &'static str = EXAM_ENV_IP;

    fn parse(descriptor: &ExamDescriptor) -> Result<Self, ExamParseError> {
        Ok(Self {
            common: Common::parse(descriptor, Self::TAG)?,
        })
    }

    fn examinate(&self, env: &dyn Environment) -> ExamReport {
        let either = AnyOf(vec![&is_ipv4 as &dyn ValueCheck, &is_ipv6]);
        examinate_vars(
            Self::TAG,
            self.common.level,
            &self.common.targets,
            env,
            &either,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_parse_guards, descriptor, invalid_reason, outcome_for};
    use medik_types::TargetOutcome;

    #[test]
    fn parse_guards() {
        assert_parse_guards::<Ipv4>(descriptor(EXAM_ENV_IPV4, &["V"]));
        assert_parse_guards::<Ipv6>(descriptor(EXAM_ENV_IPV6, &["V"]));
        assert_parse_guards::<Ip>(descriptor(EXAM_ENV_IP, &["V"]));
    }

    #[test]
    fn single_family_kinds() {
        let v4 = Ipv4::parse(&descriptor(EXAM_ENV_IPV4, &["V"])).expect("parse");
        assert_eq!(outcome_for(&v4, "192.168.0.1"), TargetOutcome::Valid);
        assert_eq!(
            invalid_reason(&outcome_for(&v4, "256.0.0.1")),
            "value should be a valid IPv4 address"
        );
        assert!(matches!(outcome_for(&v4, "::1"), TargetOutcome::Invalid { .. }));

        let v6 = Ipv6::parse(&descriptor(EXAM_ENV_IPV6, &["V"])).expect("parse");
        assert_eq!(outcome_for(&v6, "fe80::1"), TargetOutcome::Valid);
        assert!(matches!(outcome_for(&v6, "10.0.0.1"), TargetOutcome::Invalid { .. }));
    }

    #[test]
    fn ip_accepts_either_family() {
        let ip = Ip::parse(&descriptor(EXAM_ENV_IP, &["V"])).expect("parse");
        assert_eq!(outcome_for(&ip, "10.0.0.1"), TargetOutcome::Valid);
        assert_eq!(outcome_for(&ip, "::1"), TargetOutcome::Valid);
        assert_eq!(
            invalid_reason(&outcome_for(&ip, "not-an-ip")),
            "none of the accepted forms matched: value should be a valid IPv4 address; \
             value should be a valid IPv6 address"
        );
    }
}
