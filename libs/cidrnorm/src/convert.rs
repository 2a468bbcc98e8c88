use std::fmt;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;

use crate::error::Error;

/// The result of normalizing one address token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The token carried no prefix length and is passed through as-is
    Host { address: String },
    /// The token carried a prefix length; `network` has all host bits
    /// cleared and `mask` is the dotted-quad form of the prefix length
    Network { network: Ipv4Addr, mask: Ipv4Addr },
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Host { address } => write!(f, "host {address}"),
            Conversion::Network { network, mask } => write!(f, "{network} {mask}"),
        }
    }
}

/// Normalizes a single CIDR token into a [`Conversion`]
///
/// Tokens without a `/` are treated as bare host addresses and are not
/// validated further. Tokens with a prefix length are parsed leniently:
/// host bits set beyond the prefix boundary are masked down rather than
/// rejected.
pub fn convert(token: &str) -> Result<Conversion, Error> {
    if !token.contains('/') {
        return Ok(Conversion::Host {
            address: token.to_string(),
        });
    }

    // An out-of-range prefix length or a malformed address both surface
    // here as a parse failure
    let net = token
        .parse::<Ipv4Net>()
        .map_err(|_| Error::InvalidAddress(token.to_string()))?;

    Ok(Conversion::Network {
        network: net.network(),
        mask: net.netmask(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_token_passes_through() {
        assert_eq!(
            convert("192.168.1.10").unwrap(),
            Conversion::Host {
                address: "192.168.1.10".to_string()
            }
        );
    }

    #[test]
    fn test_prefix_is_expanded_to_mask() {
        assert_eq!(
            convert("10.0.0.5/24").unwrap(),
            Conversion::Network {
                network: "10.0.0.0".parse().unwrap(),
                mask: "255.255.255.0".parse().unwrap(),
            }
        );
    }

    #[test]
    fn test_mask_has_prefix_len_leading_ones() {
        for prefix_len in 0..=32u32 {
            let Conversion::Network { mask, .. } =
                convert(&format!("10.20.30.40/{prefix_len}")).unwrap()
            else {
                panic!("expected a network result");
            };
            assert_eq!(u32::from(mask).leading_ones(), prefix_len);
            assert_eq!(u32::from(mask).count_ones(), prefix_len);
        }
    }

    #[test]
    fn test_network_masking_is_idempotent() {
        for token in ["172.16.5.9/12", "10.0.0.5/24", "192.168.1.255/32", "8.8.8.8/0"] {
            let Conversion::Network { network, mask } = convert(token).unwrap() else {
                panic!("expected a network result");
            };
            assert_eq!(u32::from(network) & u32::from(mask), u32::from(network));
        }
    }

    #[test]
    fn test_host_bits_are_masked_down() {
        assert_eq!(
            convert("192.168.1.130/25").unwrap(),
            Conversion::Network {
                network: "192.168.1.128".parse().unwrap(),
                mask: "255.255.255.128".parse().unwrap(),
            }
        );
    }

    #[test]
    fn test_malformed_address_is_rejected() {
        assert!(matches!(
            convert("bogus/40"),
            Err(Error::InvalidAddress(token)) if token == "bogus/40"
        ));
    }

    #[test]
    fn test_out_of_range_prefix_is_rejected() {
        assert!(convert("10.0.0.1/33").is_err());
        assert!(convert("10.0.0.1/").is_err());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(convert("10.0.0.5/24").unwrap().to_string(), "10.0.0.0 255.255.255.0");
        assert_eq!(convert("192.168.1.10").unwrap().to_string(), "host 192.168.1.10");
    }
}
