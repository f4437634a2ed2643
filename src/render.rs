//! Fixed-shape rendering of the version fragment.
//!
//! Pure substitution into a fixed template: equal input yields byte-identical
//! output. Writing the result anywhere is the caller's job.

use crate::metadata::BuildMetadata;

const LICENSE_HEADER: &str = "\
/* vim:ts=8:sts=8:sw=4:noai:noexpandtab
 *
 * mcast version, generated at build time.
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2.1 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 */
";

/// Renders the complete C source fragment. Field order is fixed and part of
/// the artifact's contract: version triple, date, time, system, machine,
/// revision.
pub fn render(meta: &BuildMetadata) -> String {
    format!(
        "{header}\n\
         #ifdef HAVE_CONFIG_H\n\
         #\tinclude <config.h>\n\
         #endif\n\
         #include <mcast/version.h>\n\
         \n\
         \n\
         /* globals */\n\
         \n\
         const unsigned mcast_major_version = {major};\n\
         const unsigned mcast_minor_version = {minor};\n\
         const unsigned mcast_micro_version = {micro};\n\
         const char* mcast_build_date = \"{date}\";\n\
         const char* mcast_build_time = \"{time}\";\n\
         const char* mcast_build_system = \"{system}\";\n\
         const char* mcast_build_machine = \"{machine}\";\n\
         const char* mcast_build_revision = \"{revision}\";\n\
         \n\
         /* eof */\n",
        header = LICENSE_HEADER,
        major = meta.major,
        minor = meta.minor,
        micro = meta.micro,
        date = escape(&meta.build_date),
        time = escape(&meta.build_time),
        system = escape(&meta.build_system),
        machine = escape(&meta.build_machine),
        revision = escape(&meta.build_revision),
    )
}

/// Backslash-escapes quote and backslash characters so the substituted value
/// always forms a valid C string literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
