use benc::bencode::{DecodeOptions, Strict, Value, decode_exact};

use super::{PrintOptions, write_value};

fn render(input: &[u8], options: PrintOptions) -> String {
	let value = decode_exact::<Strict>(input, &DecodeOptions::default()).expect("fixture decodes");
	let mut out = String::new();
	write_value(&mut out, &value, 0, 0, options).expect("string writes cannot fail");
	out
}

#[test]
fn prints_nested_tree_with_indentation() {
	let out = render(b"d4:namel7:Winston10:Churchhille3:agei69e4:tagsdee", PrintOptions::default());
	let expected = "\
{
  \"name\" = [
    \"Winston\"
    \"Churchhill\"
  ]
  \"age\" = 69
  \"tags\" = {}
}
";
	assert_eq!(out, expected);
}

#[test]
fn truncates_long_lists_and_deep_trees() {
	let options = PrintOptions {
		max_list_items: 2,
		max_print_depth: 2,
		..PrintOptions::default()
	};
	let out = render(b"li1ei2ei3elli1eeee", options);
	let expected = "\
[
  1
  2
  ... 2 more
]
";
	assert_eq!(out, expected);

	let out = render(b"llli1eeee", options);
	assert_eq!(out, "[\n  [\n    [... 1 items]\n  ]\n]\n");
}

#[test]
fn truncates_dict_entries() {
	let options = PrintOptions {
		max_dict_entries: 1,
		..PrintOptions::default()
	};
	let out = render(b"d1:ai1e1:bi2e1:ci3ee", options);
	assert_eq!(out, "{\n  \"a\" = 1\n  ... 2 more entries\n}\n");
}

#[test]
fn binary_payloads_render_as_hex() {
	let mut out = String::new();
	write_value(&mut out, &Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]), 0, 0, PrintOptions::for_preview()).expect("writes");
	assert_eq!(out, "bytes[4] deadbeef\n");
}
