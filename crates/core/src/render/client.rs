use crate::builder::ClientFunction;
use crate::config::DataReturnType;

use super::{Render, render_doc_comment};

impl Render for ClientFunction {
    fn render(&self) -> String {
        let mut out = render_doc_comment(&self.comments);

        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let params = self
            .params
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "export async function {}{generics}({params}): {} {{\n",
            self.name, self.return_type
        ));

        let call = format!("client<{}>", self.client_generics.join(", "));
        match self.data_return_type {
            DataReturnType::Data => out.push_str(&format!("  const res = await {call}({{\n")),
            DataReturnType::Full => out.push_str(&format!("  return {call}({{\n")),
        }
        out.push_str(&format!("    method: \"{}\",\n", self.method.as_lower()));
        out.push_str(&format!("    url: {},\n", self.url));
        if self.with_params {
            out.push_str("    params,\n");
        }
        if self.with_data {
            out.push_str("    data,\n");
        }
        if self.with_headers {
            out.push_str("    headers: { ...headers, ...options.headers },\n");
        }
        out.push_str("    ...options,\n");
        out.push_str("  });\n");
        if self.data_return_type == DataReturnType::Data {
            out.push_str("  return res.data;\n");
        }
        out.push_str("}\n");
        out
    }
}
