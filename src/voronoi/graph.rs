//! The finished Voronoi graph and its node and vertex records.

use crate::primitives::Point2;
use num_traits::Float;

/// An input point of the triangulation and its Voronoi cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<F> {
    pub(crate) position: Point2<F>,
    pub(crate) cell: Vec<usize>,
    pub(crate) neighbours: Vec<usize>,
    pub(crate) closed: bool,
}

impl<F: Float> Node<F> {
    pub(crate) fn new(position: Point2<F>) -> Self {
        Self {
            position,
            cell: Vec::new(),
            neighbours: Vec::new(),
            closed: false,
        }
    }

    /// The input point.
    #[inline]
    pub fn position(&self) -> Point2<F> {
        self.position
    }

    /// Vertex indices of the cell boundary, in rotational order.
    #[inline]
    pub fn cell(&self) -> &[usize] {
        &self.cell
    }

    /// Nodes sharing a Delaunay edge with this one.
    #[inline]
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }

    /// True when the triangle fan around the node wraps around, i.e. the
    /// node is interior and its cell polygon closes.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// A Voronoi vertex: the circumcenter of one or more Delaunay triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<F> {
    pub(crate) position: Point2<F>,
    pub(crate) triangle: usize,
    pub(crate) nodes: Vec<usize>,
    pub(crate) triangle_nodes: Vec<usize>,
    pub(crate) neighbours: Vec<usize>,
}

impl<F: Float> Vertex<F> {
    pub(crate) fn new(position: Point2<F>, triangle: usize) -> Self {
        Self {
            position,
            triangle,
            nodes: Vec::new(),
            triangle_nodes: Vec::new(),
            neighbours: Vec::new(),
        }
    }

    /// The circumcenter position.
    #[inline]
    pub fn position(&self) -> Point2<F> {
        self.position
    }

    /// The first triangle found with this circumcenter.
    #[inline]
    pub fn triangle(&self) -> usize {
        self.triangle
    }

    /// Nodes whose cell contains this vertex, in discovery order.
    #[inline]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// The corner nodes of [`triangle`](Self::triangle).
    #[inline]
    pub fn triangle_nodes(&self) -> &[usize] {
        &self.triangle_nodes
    }

    /// Vertices of the triangles that share an edge with any triangle
    /// resolving to this vertex. Symmetric.
    #[inline]
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
}

/// The Voronoi dual of a triangulation.
///
/// Nodes are indexed like the triangulation's points; vertices are indexed
/// in the order their positions were first discovered. All index-returning
/// accessors panic on an out-of-range index, like slice indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiGraph<F> {
    pub(crate) nodes: Vec<Node<F>>,
    pub(crate) vertices: Vec<Vertex<F>>,
}

impl<F: Float> VoronoiGraph<F> {
    /// Number of nodes (input points).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct Voronoi vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All node records.
    #[inline]
    pub fn nodes(&self) -> &[Node<F>] {
        &self.nodes
    }

    /// All vertex records.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<F>] {
        &self.vertices
    }

    /// The node record at `node`, if it exists.
    #[inline]
    pub fn node(&self, node: usize) -> Option<&Node<F>> {
        self.nodes.get(node)
    }

    /// The vertex record at `vertex`, if it exists.
    #[inline]
    pub fn vertex(&self, vertex: usize) -> Option<&Vertex<F>> {
        self.vertices.get(vertex)
    }

    /// Node positions in index order.
    pub fn origins(&self) -> Vec<Point2<F>> {
        self.nodes.iter().map(Node::position).collect()
    }

    /// Vertex positions in index order.
    pub fn vertices_position(&self) -> Vec<Point2<F>> {
        self.vertices.iter().map(Vertex::position).collect()
    }

    /// Vertex indices of a node's cell, in rotational order.
    ///
    /// When several triangles around the node share a circumcenter, its
    /// index repeats once per triangle.
    #[inline]
    pub fn vertices_by_node(&self, node: usize) -> &[usize] {
        &self.nodes[node].cell
    }

    /// Nodes that share a Delaunay edge with `node`.
    #[inline]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        &self.nodes[node].neighbours
    }

    /// Nodes whose cell contains `vertex`.
    #[inline]
    pub fn nodes_by_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].nodes
    }

    /// Corner nodes of the triangle that produced `vertex`.
    #[inline]
    pub fn neighbours_nodes_by_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].triangle_nodes
    }

    /// Vertices connected to `vertex` by a Voronoi edge.
    #[inline]
    pub fn neighbours_vertex_by_vertex(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].neighbours
    }

    /// Positions of a node's cell polygon.
    ///
    /// Consecutive repeats of the same vertex are collapsed, including the
    /// wrap from last to first on closed cells.
    pub fn cell_polygon(&self, node: usize) -> Vec<Point2<F>> {
        let mut ids = self.nodes[node].cell.clone();
        ids.dedup();
        if self.nodes[node].closed && ids.len() > 1 && ids.first() == ids.last() {
            ids.pop();
        }
        ids.into_iter().map(|v| self.vertices[v].position).collect()
    }

    /// Every Voronoi edge once, as a pair of vertex indices `(a, b)` with `a < b`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(|(a, vertex)| {
                vertex
                    .neighbours
                    .iter()
                    .filter(move |&&b| a < b)
                    .map(move |&b| (a, b))
            })
            .collect()
    }
}
