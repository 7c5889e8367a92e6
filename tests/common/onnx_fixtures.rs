//! Tiny ONNX graphs encoded by hand so the artifact tests exercise the real
//! ONNX Runtime path without checked-in binaries.

const IR_VERSION: u64 = 8;
const OPSET_VERSION: u64 = 13;
const FLOAT: u64 = 1;

/// Scaler whose mean is the sample record, so the sample scales to zeros
pub const SAMPLE_MEAN: [f32; 8] = [2.0, 85.0, 66.0, 29.0, 0.0, 26.6, 0.351, 31.0];
pub const SAMPLE_SCALE: [f32; 8] = [3.0, 30.0, 12.0, 10.0, 100.0, 7.0, 0.3, 11.0];

/// Logistic weights driven by glucose only: sigmoid(2 * scaled_glucose)
pub const GLUCOSE_WEIGHTS: [f32; 8] = [0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

/// `variable = (X - mean) / scale`, shaped like a skl2onnx StandardScaler.
pub fn scaler_model(mean: &[f32], scale: &[f32]) -> Vec<u8> {
    let width = mean.len() as u64;
    let graph = Graph {
        name: "scaler",
        nodes: vec![
            node("Sub", &["X", "mean"], &["centered"]),
            node("Div", &["centered", "scale"], &["variable"]),
        ],
        initializers: vec![
            tensor("mean", &[width], mean),
            tensor("scale", &[width], scale),
        ],
        input: value_info("X", &[1, width]),
        output: value_info("variable", &[1, width]),
    };
    model(&graph)
}

/// `probability = sigmoid(X @ weights + bias)`, a single sigmoid unit.
pub fn logistic_model(weights: &[f32], bias: f32) -> Vec<u8> {
    let width = weights.len() as u64;
    let graph = Graph {
        name: "classifier",
        nodes: vec![
            node("MatMul", &["X", "weights"], &["product"]),
            node("Add", &["product", "bias"], &["logit"]),
            node("Sigmoid", &["logit"], &["probability"]),
        ],
        initializers: vec![
            tensor("weights", &[width, 1], weights),
            tensor("bias", &[1], &[bias]),
        ],
        input: value_info("X", &[1, width]),
        output: value_info("probability", &[1, 1]),
    };
    model(&graph)
}

struct Graph {
    name: &'static str,
    nodes: Vec<Vec<u8>>,
    initializers: Vec<Vec<u8>>,
    input: Vec<u8>,
    output: Vec<u8>,
}

fn model(graph: &Graph) -> Vec<u8> {
    let mut g = Vec::new();
    for n in &graph.nodes {
        bytes_field(&mut g, 1, n);
    }
    bytes_field(&mut g, 2, graph.name.as_bytes());
    for t in &graph.initializers {
        bytes_field(&mut g, 5, t);
    }
    bytes_field(&mut g, 11, &graph.input);
    bytes_field(&mut g, 12, &graph.output);

    let mut opset = Vec::new();
    bytes_field(&mut opset, 1, b"");
    varint_field(&mut opset, 2, OPSET_VERSION);

    let mut m = Vec::new();
    varint_field(&mut m, 1, IR_VERSION);
    bytes_field(&mut m, 2, b"diabetest-tests");
    bytes_field(&mut m, 7, &g);
    bytes_field(&mut m, 8, &opset);
    m
}

fn node(op_type: &str, inputs: &[&str], outputs: &[&str]) -> Vec<u8> {
    let mut buf = Vec::new();
    for i in inputs {
        bytes_field(&mut buf, 1, i.as_bytes());
    }
    for o in outputs {
        bytes_field(&mut buf, 2, o.as_bytes());
    }
    bytes_field(&mut buf, 3, op_type.to_lowercase().as_bytes());
    bytes_field(&mut buf, 4, op_type.as_bytes());
    buf
}

fn tensor(name: &str, dims: &[u64], values: &[f32]) -> Vec<u8> {
    let mut buf = Vec::new();
    for d in dims {
        varint_field(&mut buf, 1, *d);
    }
    varint_field(&mut buf, 2, FLOAT);
    let data: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
    bytes_field(&mut buf, 4, &data);
    bytes_field(&mut buf, 8, name.as_bytes());
    buf
}

fn value_info(name: &str, dims: &[u64]) -> Vec<u8> {
    let mut shape = Vec::new();
    for d in dims {
        let mut dim = Vec::new();
        varint_field(&mut dim, 1, *d);
        bytes_field(&mut shape, 1, &dim);
    }

    let mut tensor_type = Vec::new();
    varint_field(&mut tensor_type, 1, FLOAT);
    bytes_field(&mut tensor_type, 2, &shape);

    let mut type_proto = Vec::new();
    bytes_field(&mut type_proto, 1, &tensor_type);

    let mut buf = Vec::new();
    bytes_field(&mut buf, 1, name.as_bytes());
    bytes_field(&mut buf, 2, &type_proto);
    buf
}

fn varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn varint_field(buf: &mut Vec<u8>, field: u64, value: u64) {
    varint(buf, field << 3);
    varint(buf, value);
}

fn bytes_field(buf: &mut Vec<u8>, field: u64, data: &[u8]) {
    varint(buf, (field << 3) | 2);
    varint(buf, data.len() as u64);
    buf.extend_from_slice(data);
}
