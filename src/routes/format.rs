// Compact text rendering of routes, one line per table

use std::fmt;

use super::Route;

/// Renders a route sequence as `[{dest:"10.0.0.0/8"} {dest:"192.168.1.0/24"}]`
pub struct RouteList<'a>(pub &'a [Route]);

impl fmt::Display for RouteList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, route) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{{{}}}", RouteFields(route))?;
        }
        f.write_str("]")
    }
}

/// Non-default fields of a route in tag order
pub struct RouteFields<'a>(pub &'a Route);

impl fmt::Display for RouteFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = self.0;
        let mut sep = "";

        for (name, value) in [
            ("dest", &route.dest),
            ("mask", &route.mask),
            ("nh", &route.nh),
        ] {
            if !value.is_empty() {
                write!(f, "{}{}:", sep, name)?;
                write_quoted(f, value)?;
                sep = " ";
            }
        }
        if route.metric != 0 {
            write!(f, "{}metric:{}", sep, route.metric)?;
            sep = " ";
        }
        if !route.interface.is_empty() {
            write!(f, "{}interface:", sep)?;
            write_quoted(f, &route.interface)?;
        }
        Ok(())
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    write!(f, "\\{:03o}", byte)?;
                }
            }
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}
